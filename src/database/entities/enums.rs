//! Closed value sets stored as text columns.
//!
//! The same variants feed the CHECK constraints emitted by the schema
//! initializer, so the store and the entity models accept identical sets.
use sea_orm::Iterable;
use sea_orm::entity::prelude::*;

/// Display technology of a smartphone model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ScreenType {
    #[sea_orm(string_value = "OLED")]
    Oled,
    #[sea_orm(string_value = "LCD")]
    Lcd,
    #[sea_orm(string_value = "AMOLED")]
    Amoled,
    #[sea_orm(string_value = "IPS")]
    Ips,
}

/// Lifecycle state of a repair work order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RepairStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Stored string values of every variant, in declaration order.
pub fn allowed_values<E>() -> Vec<String>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    E::iter().map(|v| v.to_value()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_type_values() {
        assert_eq!(
            allowed_values::<ScreenType>(),
            vec!["OLED", "LCD", "AMOLED", "IPS"]
        );
    }

    #[test]
    fn test_repair_status_values() {
        assert_eq!(
            allowed_values::<RepairStatus>(),
            vec!["pending", "in_progress", "completed", "cancelled"]
        );
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        assert!(ScreenType::try_from_value(&"TFT".to_string()).is_err());
        assert!(RepairStatus::try_from_value(&"unknown".to_string()).is_err());
        assert_eq!(
            RepairStatus::try_from_value(&"in_progress".to_string()).unwrap(),
            RepairStatus::InProgress
        );
    }
}
