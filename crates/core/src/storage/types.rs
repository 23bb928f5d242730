use std::collections::HashMap;

/// Name of the partition-key attribute.
pub const PARTITION_KEY_ATTRIBUTE: &str = "pk";
/// Name of the sort-key attribute.
pub const SORT_KEY_ATTRIBUTE: &str = "sk";

/// A scalar attribute value as stored in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    S(String),
    Bool(bool),
}

impl AttributeValue {
    /// Returns the string value, if this is a string attribute.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(value) => Some(value),
            Self::Bool(_) => None,
        }
    }

    /// Returns the boolean value, if this is a boolean attribute.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::S(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::S(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::S(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A raw stored item: attribute name to value, keys included.
pub type Item = HashMap<String, AttributeValue>;

/// Composite primary key of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimaryKey {
    pub pk: String,
    pub sk: String,
}

impl PrimaryKey {
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
        }
    }

    /// Reads the key attributes out of an item.
    pub fn from_item(item: &Item) -> Option<Self> {
        let pk = item.get(PARTITION_KEY_ATTRIBUTE)?.as_s()?;
        let sk = item.get(SORT_KEY_ATTRIBUTE)?.as_s()?;
        Some(Self::new(pk, sk))
    }

    /// Converts the key into its attribute map.
    pub fn to_item(&self) -> Item {
        Item::from([
            (
                PARTITION_KEY_ATTRIBUTE.to_string(),
                AttributeValue::S(self.pk.clone()),
            ),
            (
                SORT_KEY_ATTRIBUTE.to_string(),
                AttributeValue::S(self.sk.clone()),
            ),
        ])
    }
}

/// Existence precondition on the target key of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The key must not be present yet.
    KeyNotExists,
    /// The key must already be present.
    KeyExists,
}

impl Condition {
    /// Renders the condition as a store condition expression.
    pub fn expression(&self) -> &'static str {
        match self {
            Self::KeyNotExists => "attribute_not_exists(pk) AND attribute_not_exists(sk)",
            Self::KeyExists => "attribute_exists(pk) AND attribute_exists(sk)",
        }
    }

    /// Evaluates the condition against whether the key is currently stored.
    pub fn holds(&self, key_exists: bool) -> bool {
        match self {
            Self::KeyNotExists => !key_exists,
            Self::KeyExists => key_exists,
        }
    }
}

/// Which image of the item a write returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnValues {
    #[default]
    None,
    /// The item as it is after the write.
    AllNew,
    /// The item as it was before the write.
    AllOld,
}

/// Conditional put of a whole item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutItem {
    /// The item to store, key attributes included.
    pub item: Item,
    pub condition: Option<Condition>,
}

/// Partial update of an existing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItem {
    pub key: PrimaryKey,
    /// Attributes to set, in the order they appear in the update expression.
    pub set: Vec<(String, AttributeValue)>,
    pub condition: Option<Condition>,
    pub return_values: ReturnValues,
}

impl UpdateItem {
    /// Renders `SET #a = :a,#b = :b` for the attributes in `set`.
    pub fn update_expression(&self) -> String {
        let assignments: Vec<String> = self
            .set
            .iter()
            .map(|(name, _)| format!("#{name} = :{name}"))
            .collect();
        format!("SET {}", assignments.join(","))
    }

    /// Placeholder names used by [`UpdateItem::update_expression`].
    pub fn expression_attribute_names(&self) -> HashMap<String, String> {
        self.set
            .iter()
            .map(|(name, _)| (format!("#{name}"), name.clone()))
            .collect()
    }

    /// Placeholder values used by [`UpdateItem::update_expression`].
    pub fn expression_attribute_values(&self) -> Item {
        self.set
            .iter()
            .map(|(name, value)| (format!(":{name}"), value.clone()))
            .collect()
    }
}

/// Conditional delete of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteItem {
    pub key: PrimaryKey,
    pub condition: Option<Condition>,
    pub return_values: ReturnValues,
}

/// Query for every item of a partition whose sort key starts with a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItems {
    pub partition_key: String,
    pub sort_key_prefix: String,
}

impl QueryItems {
    pub const KEY_CONDITION_EXPRESSION: &'static str = "#pk = :pk and begins_with(#sk, :sk)";

    pub fn new(partition_key: impl Into<String>, sort_key_prefix: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key_prefix: sort_key_prefix.into(),
        }
    }

    pub fn key_condition_expression(&self) -> &'static str {
        Self::KEY_CONDITION_EXPRESSION
    }

    pub fn expression_attribute_names(&self) -> HashMap<String, String> {
        HashMap::from([
            ("#pk".to_string(), PARTITION_KEY_ATTRIBUTE.to_string()),
            ("#sk".to_string(), SORT_KEY_ATTRIBUTE.to_string()),
        ])
    }

    pub fn expression_attribute_values(&self) -> Item {
        Item::from([
            (
                ":pk".to_string(),
                AttributeValue::S(self.partition_key.clone()),
            ),
            (
                ":sk".to_string(),
                AttributeValue::S(self.sort_key_prefix.clone()),
            ),
        ])
    }

    /// Whether a stored key falls inside this query.
    pub fn matches(&self, key: &PrimaryKey) -> bool {
        key.pk == self.partition_key && key.sk.starts_with(&self.sort_key_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_expressions() {
        assert_eq!(
            Condition::KeyNotExists.expression(),
            "attribute_not_exists(pk) AND attribute_not_exists(sk)"
        );
        assert_eq!(
            Condition::KeyExists.expression(),
            "attribute_exists(pk) AND attribute_exists(sk)"
        );
    }

    #[test]
    fn test_condition_holds() {
        assert!(Condition::KeyNotExists.holds(false));
        assert!(!Condition::KeyNotExists.holds(true));
        assert!(Condition::KeyExists.holds(true));
        assert!(!Condition::KeyExists.holds(false));
    }

    #[test]
    fn test_update_expression_follows_set_order() {
        let update = UpdateItem {
            key: PrimaryKey::new("TODO_APP", "TODO::13::5253"),
            set: vec![
                ("content".to_string(), AttributeValue::from("Learn Unit test")),
                ("isCompleted".to_string(), AttributeValue::from(true)),
            ],
            condition: Some(Condition::KeyExists),
            return_values: ReturnValues::AllNew,
        };

        assert_eq!(
            update.update_expression(),
            "SET #content = :content,#isCompleted = :isCompleted"
        );
        assert_eq!(
            update.expression_attribute_names(),
            HashMap::from([
                ("#content".to_string(), "content".to_string()),
                ("#isCompleted".to_string(), "isCompleted".to_string()),
            ])
        );
        assert_eq!(
            update.expression_attribute_values(),
            Item::from([
                (":content".to_string(), AttributeValue::from("Learn Unit test")),
                (":isCompleted".to_string(), AttributeValue::from(true)),
            ])
        );
    }

    #[test]
    fn test_update_expression_single_attribute() {
        let update = UpdateItem {
            key: PrimaryKey::new("TODO_APP", "TODO::1::2"),
            set: vec![("isCompleted".to_string(), AttributeValue::from(false))],
            condition: None,
            return_values: ReturnValues::None,
        };

        assert_eq!(update.update_expression(), "SET #isCompleted = :isCompleted");
    }

    #[test]
    fn test_query_expressions() {
        let query = QueryItems::new("TODO_APP", "TODO");

        assert_eq!(
            query.key_condition_expression(),
            "#pk = :pk and begins_with(#sk, :sk)"
        );
        assert_eq!(
            query.expression_attribute_names(),
            HashMap::from([
                ("#pk".to_string(), "pk".to_string()),
                ("#sk".to_string(), "sk".to_string()),
            ])
        );
        assert_eq!(
            query.expression_attribute_values(),
            Item::from([
                (":pk".to_string(), AttributeValue::from("TODO_APP")),
                (":sk".to_string(), AttributeValue::from("TODO")),
            ])
        );
    }

    #[test]
    fn test_query_matches_prefix_within_partition() {
        let query = QueryItems::new("TODO_APP", "TODO::1");

        assert!(query.matches(&PrimaryKey::new("TODO_APP", "TODO::1::5215")));
        assert!(!query.matches(&PrimaryKey::new("OTHER", "TODO::1::5215")));
        assert!(!query.matches(&PrimaryKey::new("TODO_APP", "USER::1")));
        // Prefix match is on raw characters, not on whole segments.
        assert!(query.matches(&PrimaryKey::new("TODO_APP", "TODO::12::7")));
    }

    #[test]
    fn test_primary_key_item_round_trip() {
        let key = PrimaryKey::new("TODO_APP", "USER::1");
        assert_eq!(PrimaryKey::from_item(&key.to_item()), Some(key));
    }

    #[test]
    fn test_primary_key_from_item_missing_sort_key() {
        let item = Item::from([("pk".to_string(), AttributeValue::from("TODO_APP"))]);
        assert_eq!(PrimaryKey::from_item(&item), None);
    }
}
