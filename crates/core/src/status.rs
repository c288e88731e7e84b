//! Enumerated status, priority and type fields.
//!
//! Each enum serializes to the exact wire string given in its definition and
//! can be parsed back from it with [`std::str::FromStr`].

macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(crate::error::CoreError::Validation(format!(
                        "Invalid {}: '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

define_string_enum! {
    /// Operational state of an installation.
    InstallationStatus {
        Active = "active",
        Inactive = "inactive",
        Maintenance = "maintenance",
    }
}

define_string_enum! {
    /// Grid connection topology of an installation.
    SystemType {
        OnGrid = "on-grid",
        OffGrid = "off-grid",
        Hybrid = "hybrid",
    }
}

define_string_enum! {
    /// Ticket lifecycle status.
    TicketStatus {
        Open = "open",
        InProgress = "in_progress",
        Resolved = "resolved",
        Closed = "closed",
    }
}

define_string_enum! {
    TicketPriority {
        Low = "low",
        Medium = "medium",
        High = "high",
        Urgent = "urgent",
    }
}

define_string_enum! {
    /// Kind of service work a ticket represents.
    TicketType {
        Maintenance = "maintenance",
        Repair = "repair",
        Inspection = "inspection",
        Installation = "installation",
        Other = "other",
    }
}

define_string_enum! {
    /// Kind of event an activity entry records.
    ActivityType {
        TicketCreated = "ticket_created",
        TicketUpdated = "ticket_updated",
        InstallationCreated = "installation_created",
        InstallationUpdated = "installation_updated",
    }
}

define_string_enum! {
    /// Entity kind an activity entry points at.
    EntityType {
        Ticket = "ticket",
        Installation = "installation",
    }
}

impl TicketStatus {
    /// Open and in-progress tickets still need work.
    pub fn is_open(self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::error::CoreError;

    #[test]
    fn ticket_status_serializes_snake_case() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn system_type_uses_hyphenated_names() {
        let json = serde_json::to_string(&SystemType::OffGrid).unwrap();
        assert_eq!(json, "\"off-grid\"");
        let parsed: SystemType = "on-grid".parse().unwrap();
        assert_eq!(parsed, SystemType::OnGrid);
    }

    #[test]
    fn every_variant_parses_from_its_wire_name() {
        for status in TicketStatus::ALL {
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), *status);
        }
        for kind in TicketType::ALL {
            assert_eq!(kind.to_string().parse::<TicketType>().unwrap(), *kind);
        }
    }

    #[test]
    fn unknown_value_is_a_validation_error() {
        assert_matches!("pending".parse::<TicketStatus>(), Err(CoreError::Validation(msg)) if msg.contains("TicketStatus"));
    }

    #[test]
    fn open_statuses() {
        assert!(TicketStatus::Open.is_open());
        assert!(TicketStatus::InProgress.is_open());
        assert!(!TicketStatus::Resolved.is_open());
        assert!(!TicketStatus::Closed.is_open());
    }
}
