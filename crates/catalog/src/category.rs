use serde::{Deserialize, Serialize};

use prodcat_core::{CategoryId, Entity, UserId};

/// Product category, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: u32,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId::new(owner_id),
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;
    const KIND: &'static str = "category";

    fn id(&self) -> CategoryId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_uses_camel_case_key() {
        let json = r#"{"id":10,"title":"Dairy","icon":"🥛","ownerId":100}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category, Category::new(10, "Dairy", "🥛", 100));
        assert_eq!(serde_json::to_string(&category).unwrap(), json);
    }
}
