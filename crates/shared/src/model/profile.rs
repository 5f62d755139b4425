use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MakerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub location: String,
}

impl Default for MakerProfile {
    fn default() -> Self {
        Self {
            name: "Chef's Corner".to_string(),
            email: "maker@mail.com".to_string(),
            phone: "+61 3 8652 1453".to_string(),
            country: "Australia".to_string(),
            location: "Shop LGSS09, 99 Spencer St, Docklands VIC 3008".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EaterProfile {
    pub display_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub favorite_cuisine: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl EaterProfile {
    pub fn placeholder(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            phone: None,
            favorite_cuisine: None,
            note: None,
        }
    }
}

/// Profile cached on the session record, tagged by the owning role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Profile {
    Maker(MakerProfile),
    Eater(EaterProfile),
}

impl Profile {
    pub fn as_maker(&self) -> Option<&MakerProfile> {
        match self {
            Profile::Maker(profile) => Some(profile),
            Profile::Eater(_) => None,
        }
    }

    pub fn as_eater(&self) -> Option<&EaterProfile> {
        match self {
            Profile::Eater(profile) => Some(profile),
            Profile::Maker(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_tagged_by_role() {
        let profile = Profile::Eater(EaterProfile::placeholder("sam"));
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["kind"], "eater");
        assert_eq!(value["display_name"], "sam");

        let back: Profile = serde_json::from_value(value).unwrap();
        assert_eq!(back.as_eater().map(|p| p.display_name.as_str()), Some("sam"));
        assert!(back.as_maker().is_none());
    }

    #[test]
    fn maker_default_is_the_showcase_shop() {
        let profile = MakerProfile::default();
        assert_eq!(profile.name, "Chef's Corner");
        assert_eq!(profile.country, "Australia");
    }
}
