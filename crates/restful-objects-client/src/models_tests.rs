//! Tests for the object API data models.

use super::*;
use serde_json::json;

mod serialization {
    use super::*;

    /// Verify an unsaved item omits `id` and uses the API's attribute key names.
    #[test]
    fn test_unsaved_item_serializes_with_api_keys() {
        let item = Item::new("Test Name").with_data(
            Attributes::default()
                .with_year(2000)
                .with_price(3000.0)
                .with_cpu_model("I7")
                .with_hard_disk_size("20 TB")
                .with_color("Green"),
        );

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Test Name",
                "data": {
                    "year": 2000,
                    "price": 3000.0,
                    "CPU model": "I7",
                    "Hard disk size": "20 TB",
                    "color": "Green"
                }
            })
        );
    }

    /// Verify absent attribute fields are left out rather than sent as null.
    #[test]
    fn test_partial_attributes_skip_missing_fields() {
        let attributes = Attributes::default().with_color("Brown");

        let value = serde_json::to_value(&attributes).unwrap();

        assert_eq!(value, json!({ "color": "Brown" }));
    }

    #[test]
    fn test_item_without_data_omits_data_key() {
        let value = serde_json::to_value(Item::new("Bare")).unwrap();

        assert_eq!(value, json!({ "name": "Bare" }));
    }
}

mod deserialization {
    use super::*;

    /// Verify a stored object decodes with its id and ignores unknown attribute keys.
    #[test]
    fn test_item_deserialize_with_unknown_attribute_keys() {
        let body = json!({
            "id": "1",
            "name": "Google Pixel 6 Pro",
            "data": {
                "color": "Cloudy White",
                "capacity": "128 GB"
            }
        });

        let item: Item = serde_json::from_value(body).unwrap();

        assert_eq!(item.id(), Some(&ItemId::new("1")));
        assert_eq!(item.name, "Google Pixel 6 Pro");
        let data = item.data.expect("data should be present");
        assert_eq!(data.color.as_deref(), Some("Cloudy White"));
        assert_eq!(data.year, None);
    }

    /// Verify `"data": null` decodes as absent attributes.
    #[test]
    fn test_item_deserialize_null_data() {
        let body = json!({ "id": "7", "name": "Apple MacBook Pro 16", "data": null });

        let item: Item = serde_json::from_value(body).unwrap();

        assert!(item.data.is_none());
    }

    #[test]
    fn test_item_deserialize_spaced_attribute_keys() {
        let body = json!({
            "id": "7",
            "name": "Apple MacBook Pro 16",
            "data": {
                "year": 2019,
                "price": 1849.99,
                "CPU model": "Intel Core i9",
                "Hard disk size": "1 TB"
            }
        });

        let item: Item = serde_json::from_value(body).unwrap();
        let data = item.data.unwrap();

        assert_eq!(data.year, Some(2019));
        assert_eq!(data.price, Some(1849.99));
        assert_eq!(data.cpu_model.as_deref(), Some("Intel Core i9"));
        assert_eq!(data.hard_disk_size.as_deref(), Some("1 TB"));
    }

    /// Verify an item body without a name is rejected.
    #[test]
    fn test_item_deserialize_requires_name() {
        let result = serde_json::from_value::<Item>(json!({ "id": "1" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_delete_confirmation_deserialize() {
        let body = json!({ "message": "Object with id = 6, has been deleted." });

        let confirmation: DeleteConfirmation = serde_json::from_value(body).unwrap();

        assert_eq!(confirmation.message, "Object with id = 6, has been deleted.");
    }
}

mod identifiers {
    use super::*;

    #[test]
    fn test_item_id_display_is_raw_value() {
        let id = ItemId::from("ff808181932badb6");

        assert_eq!(id.to_string(), "ff808181932badb6");
        assert_eq!(id.as_str(), "ff808181932badb6");
    }

    #[test]
    fn test_item_id_serializes_as_plain_string() {
        let value = serde_json::to_value(ItemId::new("6")).unwrap();

        assert_eq!(value, json!("6"));
    }
}
