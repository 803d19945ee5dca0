//! Catalogs compiled into the binary

use nakshatra_domain::{Entity, EntityKind, Question};

use crate::loader::{parse_entities, parse_questions, Format};
use crate::CatalogError;

/// Built-in question catalog source
pub const QUESTIONS_TOML: &str = include_str!("../data/questions.toml");

/// Built-in party catalog source (authored on [-10, +10])
pub const PARTIES_TOML: &str = include_str!("../data/parties.toml");

/// Built-in leader catalog source
pub const LEADERS_TOML: &str = include_str!("../data/leaders.toml");

/// The 36-question catalog, 12 per axis
pub fn questions() -> Result<Vec<Question>, CatalogError> {
    parse_questions(QUESTIONS_TOML, Format::Toml)
}

/// The party catalog, rescaled to [-1, +1]
pub fn parties() -> Result<Vec<Entity>, CatalogError> {
    parse_entities(PARTIES_TOML, Format::Toml, Some(EntityKind::Party))
}

/// The leader catalog
pub fn leaders() -> Result<Vec<Entity>, CatalogError> {
    parse_entities(LEADERS_TOML, Format::Toml, Some(EntityKind::Leader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nakshatra_domain::Axis;

    #[test]
    fn test_builtin_questions() {
        let questions = questions().unwrap();
        assert_eq!(questions.len(), 36);
        for axis in Axis::ALL {
            assert_eq!(questions.iter().filter(|q| q.axis == axis).count(), 12);
            assert!(questions.iter().any(|q| q.axis == axis && q.reverse));
        }
        assert!(questions.iter().all(|q| q.weight == 1.0 && q.text.is_some()));
        assert_eq!(questions[0].id.as_str(), "ST_01");
        assert_eq!(questions[35].id.as_str(), "SID_12");
        assert_eq!(questions[12].id.as_str(), "RC_01");
        assert_eq!(questions[24].id.as_str(), "SID_01");
        assert_eq!(questions.iter().filter(|q| q.reverse).count(), 14);
    }

    #[test]
    fn test_builtin_parties_rescaled() {
        let parties = parties().unwrap();
        assert_eq!(parties.len(), 8);

        let bjp = parties.iter().find(|p| p.id == "bjp").unwrap();
        assert_eq!(bjp.short_name.as_deref(), Some("BJP"));
        assert!((bjp.position.statism() - 0.4).abs() < 1e-12);
        assert!((bjp.position.recognition() + 0.7).abs() < 1e-12);
        assert!(parties.iter().all(|p| p.position.is_valid()));
    }

    #[test]
    fn test_builtin_leaders() {
        let leaders = leaders().unwrap();
        assert_eq!(leaders.len(), 16);
        assert!(leaders.iter().all(|l| l.kind == EntityKind::Leader));
        assert!(leaders.iter().all(|l| l.attribute("party_id").is_some()));
    }

    #[test]
    fn test_builtin_metadata_survives_load() {
        let leaders = leaders().unwrap();
        let mamata = leaders.iter().find(|l| l.id == "mamata").unwrap();
        assert_eq!(
            mamata.ideology(),
            ["Bengali Nationalism", "Minority Rights", "Welfare Populism"]
        );
        assert_eq!(mamata.attribute("tenure"), Some("2011-present"));
        assert_eq!(mamata.attribute_list("key_policies").len(), 5);
        assert!(mamata.attribute("reasoning").is_some());

        let parties = parties().unwrap();
        let bjp = parties.iter().find(|p| p.id == "bjp").unwrap();
        assert_eq!(bjp.attribute("founded"), Some("1980"));
        assert_eq!(
            bjp.attribute("electoral_strength"),
            Some("National, strong in North and West India")
        );

        for entity in parties.iter().chain(&leaders) {
            assert_eq!(entity.ideology().len(), 3, "{} ideology", entity.id);
            assert!(!entity.attribute_list("key_policies").is_empty());
        }
    }
}
