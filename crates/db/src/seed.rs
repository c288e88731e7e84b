//! Demo data loaded at startup when `SEED_DEMO_DATA` is enabled.

use chrono::{TimeZone, Utc};
use solar_core::models::{
    Installation, InternalNote, Inverter, Panel, PartUsed, Technician, Ticket,
};
use solar_core::status::{
    InstallationStatus, SystemType, TicketPriority, TicketStatus, TicketType,
};
use solar_core::types::Timestamp;

use crate::store::Seed;

const COMPANY_ID: &str = "company-1";

fn at(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or_default()
}

fn technician(id: &str, name: &str, email: &str, phone: &str, specialties: &[&str], active: bool) -> Technician {
    Technician {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        active,
    }
}

/// Three technicians, four installations and six tickets.
pub fn demo_seed() -> Seed {
    let technicians = vec![
        technician(
            "tech-1",
            "Carlos Mendoza",
            "carlos.mendoza@solarservice.example",
            "+51 987 654 321",
            &["inverters", "on-grid", "electrical"],
            true,
        ),
        technician(
            "tech-2",
            "Lucía Ramírez",
            "lucia.ramirez@solarservice.example",
            "+51 912 345 678",
            &["batteries", "off-grid"],
            true,
        ),
        technician(
            "tech-3",
            "Jorge Salazar",
            "jorge.salazar@solarservice.example",
            "+51 934 567 890",
            &["mounting", "inspection"],
            false,
        ),
    ];

    let installations = vec![
        Installation {
            id: "inst-1".into(),
            company_id: COMPANY_ID.into(),
            client_name: "Agroindustrias del Sur".into(),
            site_name: "Planta Empacadora".into(),
            address: "Carretera Panamericana Sur km 45".into(),
            city: "Arequipa".into(),
            lat: -16.409,
            lng: -71.537,
            system_type: SystemType::OnGrid,
            panels: vec![Panel {
                brand: "Jinko".into(),
                model: "Tiger Neo 575".into(),
                wattage: 575,
                qty: 120,
            }],
            inverter: Inverter {
                brand: "Huawei".into(),
                model: "SUN2000-60KTL".into(),
                serial: "HW60K-00231".into(),
            },
            installed_at: at(2023, 3, 14, 15),
            status: InstallationStatus::Active,
            assigned_technician_id: Some("tech-1".into()),
        },
        Installation {
            id: "inst-2".into(),
            company_id: COMPANY_ID.into(),
            client_name: "Hostal Vista Andina".into(),
            site_name: "Techo Principal".into(),
            address: "Calle Plateros 321".into(),
            city: "Cusco".into(),
            lat: -13.516,
            lng: -71.978,
            system_type: SystemType::Hybrid,
            panels: vec![Panel {
                brand: "Canadian Solar".into(),
                model: "HiKu6 450".into(),
                wattage: 450,
                qty: 24,
            }],
            inverter: Inverter {
                brand: "Victron".into(),
                model: "MultiPlus-II 48/5000".into(),
                serial: "VC-MP2-7781".into(),
            },
            installed_at: at(2023, 8, 2, 13),
            status: InstallationStatus::Maintenance,
            assigned_technician_id: Some("tech-2".into()),
        },
        Installation {
            id: "inst-3".into(),
            company_id: COMPANY_ID.into(),
            client_name: "Comunidad Campesina Huanca".into(),
            site_name: "Posta Médica".into(),
            address: "Plaza Central s/n".into(),
            city: "Huancayo".into(),
            lat: -12.065,
            lng: -75.204,
            system_type: SystemType::OffGrid,
            panels: vec![
                Panel {
                    brand: "Trina".into(),
                    model: "Vertex S 405".into(),
                    wattage: 405,
                    qty: 8,
                },
                Panel {
                    brand: "Trina".into(),
                    model: "Vertex S 425".into(),
                    wattage: 425,
                    qty: 4,
                },
            ],
            inverter: Inverter {
                brand: "Victron".into(),
                model: "Quattro 48/3000".into(),
                serial: "VC-Q-1190".into(),
            },
            installed_at: at(2024, 1, 20, 16),
            status: InstallationStatus::Active,
            assigned_technician_id: None,
        },
        Installation {
            id: "inst-4".into(),
            company_id: COMPANY_ID.into(),
            client_name: "Colegio San Martín".into(),
            site_name: "Pabellón B".into(),
            address: "Av. Los Próceres 1450".into(),
            city: "Lima".into(),
            lat: -12.046,
            lng: -77.043,
            system_type: SystemType::OnGrid,
            panels: vec![Panel {
                brand: "LONGi".into(),
                model: "Hi-MO 5 540".into(),
                wattage: 540,
                qty: 40,
            }],
            inverter: Inverter {
                brand: "Fronius".into(),
                model: "Symo 20.0-3-M".into(),
                serial: "FR-SY-4410".into(),
            },
            installed_at: at(2022, 11, 5, 14),
            status: InstallationStatus::Inactive,
            assigned_technician_id: Some("tech-3".into()),
        },
    ];

    let tickets = vec![
        Ticket {
            id: "ticket-1".into(),
            installation_id: "inst-1".into(),
            ticket_type: TicketType::Repair,
            priority: TicketPriority::High,
            status: TicketStatus::InProgress,
            title: "Inverter fault code 2032".into(),
            description: "String 3 reports insulation resistance below threshold.".into(),
            assigned_technician_id: Some("tech-1".into()),
            created_at: at(2025, 6, 2, 9),
            updated_at: at(2025, 6, 3, 11),
            resolved_at: None,
            internal_notes: vec![InternalNote {
                id: "note-1".into(),
                author_id: "tech-1".into(),
                content: "Megger test scheduled; suspect damaged MC4 on row 7.".into(),
                created_at: at(2025, 6, 3, 11),
            }],
            parts_used: vec![],
        },
        Ticket {
            id: "ticket-2".into(),
            installation_id: "inst-2".into(),
            ticket_type: TicketType::Maintenance,
            priority: TicketPriority::Medium,
            status: TicketStatus::Open,
            title: "Battery bank capacity check".into(),
            description: "Quarterly capacity test of the lithium bank.".into(),
            assigned_technician_id: Some("tech-2".into()),
            created_at: at(2025, 6, 10, 8),
            updated_at: at(2025, 6, 10, 8),
            resolved_at: None,
            internal_notes: vec![],
            parts_used: vec![],
        },
        Ticket {
            id: "ticket-3".into(),
            installation_id: "inst-1".into(),
            ticket_type: TicketType::Inspection,
            priority: TicketPriority::Low,
            status: TicketStatus::Resolved,
            title: "Annual thermographic inspection".into(),
            description: "Drone IR survey of all arrays.".into(),
            assigned_technician_id: Some("tech-1".into()),
            created_at: at(2025, 4, 1, 9),
            updated_at: at(2025, 4, 3, 21),
            resolved_at: Some(at(2025, 4, 3, 21)),
            internal_notes: vec![],
            parts_used: vec![],
        },
        Ticket {
            id: "ticket-4".into(),
            installation_id: "inst-3".into(),
            ticket_type: TicketType::Repair,
            priority: TicketPriority::Urgent,
            status: TicketStatus::Closed,
            title: "Charge controller replacement".into(),
            description: "Controller burned after lightning strike.".into(),
            assigned_technician_id: None,
            created_at: at(2025, 2, 14, 7),
            updated_at: at(2025, 2, 15, 19),
            resolved_at: Some(at(2025, 2, 15, 7)),
            internal_notes: vec![],
            parts_used: vec![PartUsed {
                id: "part-1".into(),
                name: "MPPT charge controller 150/60".into(),
                qty: 1,
                cost: 489.90,
            }],
        },
        Ticket {
            id: "ticket-5".into(),
            installation_id: "inst-4".into(),
            ticket_type: TicketType::Other,
            priority: TicketPriority::Low,
            status: TicketStatus::Open,
            title: "Monitoring portal access".into(),
            description: "Client requests a second monitoring login.".into(),
            assigned_technician_id: None,
            created_at: at(2025, 6, 12, 10),
            updated_at: at(2025, 6, 12, 10),
            resolved_at: None,
            internal_notes: vec![],
            parts_used: vec![],
        },
        Ticket {
            id: "ticket-6".into(),
            installation_id: "inst-2".into(),
            ticket_type: TicketType::Installation,
            priority: TicketPriority::Medium,
            status: TicketStatus::Open,
            title: "Add two panels to east roof".into(),
            description: "Expansion approved by the client.".into(),
            assigned_technician_id: Some("tech-9".into()),
            created_at: at(2025, 6, 13, 15),
            updated_at: at(2025, 6, 13, 15),
            resolved_at: None,
            internal_notes: vec![],
            parts_used: vec![],
        },
    ];

    Seed {
        installations,
        tickets,
        technicians,
    }
}
