//! Scenario definitions.
//!
//! Each scenario sends its requests through the session's client, decodes the
//! response, and checks the fields named in [`Expectations`]. The first
//! failed check ends the scenario.

use std::fmt;

use restful_objects_client::{Attributes, Item, ItemId, ObjectsClient};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Expectations;
use crate::error::{AssertionFailure, HarnessError};

/// One harness test case against the object API.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// GET /objects and check the item count
    ListAll,
    /// GET a single object and check its id and name
    GetSingle,
    /// POST a new object and check the echoed name and data
    Create,
    /// GET an object, rename it, PUT it back and check the new name
    Update,
    /// DELETE an object and check the confirmation message
    Delete,
}

impl Scenario {
    /// All scenarios in their conventional order.
    pub const ALL: [Scenario; 5] = [
        Scenario::ListAll,
        Scenario::GetSingle,
        Scenario::Create,
        Scenario::Update,
        Scenario::Delete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ListAll => "list-all",
            Self::GetSingle => "get-single",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ListAll => "List all objects and check the exact count",
            Self::GetSingle => "Fetch one object and check its id and name",
            Self::Create => "Create an object and check the echoed name and data",
            Self::Update => "Rename an object and check the updated name",
            Self::Delete => "Delete an object and check the confirmation message",
        }
    }

    /// Run the scenario's requests and checks against `client`.
    pub async fn execute(
        &self,
        client: &ObjectsClient,
        expectations: &Expectations,
    ) -> Result<(), HarnessError> {
        match self {
            Self::ListAll => list_all(client, expectations).await,
            Self::GetSingle => get_single(client, expectations).await,
            Self::Create => create(client, expectations).await,
            Self::Update => update(client, expectations).await,
            Self::Delete => delete(client, expectations).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Item sent by the create scenario.
pub fn new_item(name: &str) -> Item {
    Item::new(name).with_data(
        Attributes::default()
            .with_year(2000)
            .with_price(3000.0)
            .with_cpu_model("I7")
            .with_hard_disk_size("20 TB")
            .with_color("Green"),
    )
}

async fn list_all(client: &ObjectsClient, expectations: &Expectations) -> Result<(), HarnessError> {
    let items = client.list_items().await?;
    debug!(count = items.len(), "Listed objects");

    if items.len() <= 1 {
        return Err(AssertionFailure::new(
            "item count",
            "more than 1",
            items.len().to_string(),
        )
        .into());
    }

    ensure_eq("item count", &expectations.list_count, &items.len())
}

async fn get_single(
    client: &ObjectsClient,
    expectations: &Expectations,
) -> Result<(), HarnessError> {
    let item = client
        .get_item(&ItemId::new(expectations.single_item_id.as_str()))
        .await?;

    let id = item.id().ok_or_else(|| HarnessError::MissingField {
        field: "id".to_string(),
    })?;
    ensure_eq("item id", expectations.single_item_id.as_str(), id.as_str())?;
    ensure_eq(
        "item name",
        expectations.single_item_name.as_str(),
        item.name.as_str(),
    )
}

async fn create(client: &ObjectsClient, expectations: &Expectations) -> Result<(), HarnessError> {
    let created = client
        .create_item(&new_item(&expectations.created_name))
        .await?;
    debug!(id = ?created.id(), "Created object");

    ensure_eq(
        "created item name",
        expectations.created_name.as_str(),
        created.name.as_str(),
    )?;

    if created.data.is_none() {
        return Err(AssertionFailure::new("created item data", "present", "absent").into());
    }

    Ok(())
}

async fn update(client: &ObjectsClient, expectations: &Expectations) -> Result<(), HarnessError> {
    let id = ItemId::new(expectations.updated_item_id.as_str());

    let mut item = client.get_item(&id).await?;
    item.name = expectations.updated_name.clone();

    let updated = client.update_item(&id, &item).await?;

    ensure_eq(
        "updated item name",
        expectations.updated_name.as_str(),
        updated.name.as_str(),
    )
}

async fn delete(client: &ObjectsClient, expectations: &Expectations) -> Result<(), HarnessError> {
    let confirmation = client
        .delete_item(&ItemId::new(expectations.deleted_item_id.as_str()))
        .await?;

    ensure_eq(
        "delete message",
        expectations.delete_message().as_str(),
        confirmation.message.as_str(),
    )
}

fn ensure_eq<T>(check: &str, expected: &T, actual: &T) -> Result<(), HarnessError>
where
    T: PartialEq + fmt::Debug + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionFailure::new(check, format!("{:?}", expected), format!("{:?}", actual)).into())
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
