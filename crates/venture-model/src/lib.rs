pub mod deal;
pub mod error;
pub mod field;
pub mod user;
pub mod venture;

pub use deal::{Deal, DealStage};
pub use error::{ModelError, Result};
pub use field::{FieldKind, FieldValue, Identified};
pub use user::{User, UserRole, UserStatus};
pub use venture::{Venture, VentureStage};

/// Lowercase a user-supplied enum key and fold `-`/space separators to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn enum_keys_parse_leniently() {
        assert_eq!("Founder".parse::<UserRole>(), Ok(UserRole::Founder));
        assert_eq!("due-diligence".parse::<DealStage>(), Ok(DealStage::DueDiligence));
        assert_eq!("Series A".parse::<VentureStage>(), Ok(VentureStage::SeriesA));
        assert_eq!(
            "ghost".parse::<UserStatus>(),
            Err(ModelError::UnknownVariant {
                kind: "status",
                value: "ghost".to_string(),
            })
        );
    }

    #[test]
    fn enum_keys_round_trip_through_as_str() {
        for role in UserRole::all() {
            assert_eq!(role.as_str().parse::<UserRole>().as_ref(), Ok(role));
        }
        for stage in DealStage::all() {
            assert_eq!(stage.as_str().parse::<DealStage>().as_ref(), Ok(stage));
        }
        for stage in VentureStage::all() {
            assert_eq!(stage.as_str().parse::<VentureStage>().as_ref(), Ok(stage));
        }
    }

    #[test]
    fn venture_multiple_requires_investment() {
        let mut venture = Venture {
            id: "v-1".to_string(),
            name: "Northwind".to_string(),
            industry: "Logistics".to_string(),
            stage: VentureStage::Seed,
            founder: "Ada".to_string(),
            ownership_pct: 12.5,
            invested: 500_000.0,
            current_value: 1_250_000.0,
            founded: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            tags: vec![],
        };
        assert_eq!(venture.multiple(), Some(2.5));
        venture.invested = 0.0;
        assert_eq!(venture.multiple(), None);
    }

    #[test]
    fn user_serializes_with_snake_case_enums() {
        let user = User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::Founder,
            status: UserStatus::Active,
            company: None,
            joined: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let json = serde_json::to_value(&user).expect("serialize user");
        assert_eq!(json["role"], "founder");
        assert_eq!(json["joined"], "2024-01-15");
    }
}
