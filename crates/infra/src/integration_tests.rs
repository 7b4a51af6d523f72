//! End-to-end tests: CatalogService → JsonFileStore → file on disk.
//!
//! Verifies:
//! - Mutations are written through and survive a fresh service instance
//! - Uniqueness and validation failures leave the file untouched
//! - A corrupt file degrades to an empty catalog

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tokio_util::sync::CancellationToken;

    use shelf_core::{ProductId, Status};
    use shelf_products::{Category, Decimal, Manufacturer, Product, ProductRequest};

    use crate::catalog::CatalogService;
    use crate::config::StoreConfig;
    use crate::record_store::{JsonFileStore, RecordStore};

    fn config(dir: &TempDir) -> StoreConfig {
        StoreConfig::new(dir.path().join("Data"), "products.json")
    }

    fn open_service(dir: &TempDir) -> CatalogService<JsonFileStore> {
        CatalogService::new(JsonFileStore::open(&config(dir)).unwrap())
    }

    fn cancel() -> CancellationToken {
        CancellationToken::new()
    }

    fn hammer_request() -> ProductRequest {
        ProductRequest::new("Hammer", "Steel hammer", "Tools", "Bosch", Decimal::new(100, 0))
    }

    fn seeded(dir: &TempDir, records: &[Product]) {
        JsonFileStore::open(&config(dir))
            .unwrap()
            .write_all(records, &cancel())
            .unwrap();
    }

    fn record(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            description: format!("{name} description"),
            category: Some(Category::new("Tools")),
            manufacturer: Some(Manufacturer::new("Bosch")),
            price: Decimal::new(10, 0),
        }
    }

    #[test]
    fn create_on_empty_store_then_list() {
        let dir = TempDir::new().unwrap();
        let mut service = open_service(&dir);

        let created = service.create(Some(&hammer_request()), &cancel());
        assert!(created.success);
        assert_eq!(created.status, Status::NoContent);

        let all = service.get_all(&cancel()).content.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Hammer");
        assert_eq!(all[0].price, Decimal::new(100, 0));
    }

    #[test]
    fn created_record_reads_back_unchanged_after_restart() {
        let dir = TempDir::new().unwrap();
        let created = open_service(&dir)
            .create(Some(&hammer_request()), &cancel())
            .content
            .unwrap();

        let mut reopened = open_service(&dir);
        let fetched = reopened.get_by_id(created.id.as_str(), &cancel());

        assert_eq!(fetched.status, Status::Ok);
        assert_eq!(fetched.content, Some(created));
    }

    #[test]
    fn rename_is_visible_by_id() {
        let dir = TempDir::new().unwrap();
        seeded(&dir, &[record("1", "OldProduct")]);
        let mut service = open_service(&dir);

        let edited = record("1", "NewProduct");
        let result = service.update(Some(&edited), &cancel());

        assert!(result.success);
        assert_eq!(result.status, Status::NoContent);
        assert_eq!(service.get_by_id("1", &cancel()).content.unwrap().name, "NewProduct");
        assert_eq!(open_service(&dir).get_by_id("1", &cancel()).content, Some(edited));
    }

    #[test]
    fn delete_leaves_only_other_records() {
        let dir = TempDir::new().unwrap();
        seeded(&dir, &[record("1", "Hammer"), record("2", "Saw")]);
        let mut service = open_service(&dir);

        let hammer = service.get_by_name("Hammer", &cancel()).content.unwrap();
        let result = service.delete(Some(&hammer), &cancel());

        assert!(result.success);
        assert_eq!(result.status, Status::Ok);
        let names: Vec<_> = open_service(&dir)
            .get_all(&cancel())
            .content
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Saw"]);
    }

    #[test]
    fn duplicate_name_does_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let mut service = open_service(&dir);
        service.create(Some(&hammer_request()), &cancel());
        let path = config(&dir).file_path();
        let before = fs::read_to_string(&path).unwrap();

        let upper = ProductRequest {
            name: "HAMMER".to_string(),
            ..hammer_request()
        };
        let result = service.create(Some(&upper), &cancel());

        assert!(!result.success);
        assert!(result.field_errors.iter().any(|e| e.field == "Name"));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(service.get_all(&cancel()).content.unwrap().len(), 1);
    }

    #[test]
    fn corrupt_file_reads_as_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(&config(&dir)).unwrap();
        fs::write(store.path(), "{invalid json}").unwrap();

        assert!(store.read_all().is_empty());

        let mut service = CatalogService::new(store);
        let all = service.get_all(&cancel());
        assert!(all.success);
        assert_eq!(all.content, Some(vec![]));
    }

    #[test]
    fn unknown_id_is_404_without_payload() {
        let dir = TempDir::new().unwrap();
        seeded(&dir, &[record("1", "Hammer")]);
        let mut service = open_service(&dir);

        let result = service.get_by_id("does-not-exist", &cancel());

        assert_eq!(result.status, Status::NotFound);
        assert!(result.content.is_none());
    }

    #[test]
    fn memory_and_file_agree_after_each_mutation() {
        let dir = TempDir::new().unwrap();
        let mut service = open_service(&dir);
        let on_disk = || JsonFileStore::open(&config(&dir)).unwrap().read_all();

        let saw = service
            .create(
                Some(&ProductRequest::new(
                    "Saw",
                    "Hand saw",
                    "Tools",
                    "Bahco",
                    "24.1234567890123456789".parse().unwrap(),
                )),
                &cancel(),
            )
            .content
            .unwrap();
        assert_eq!(service.get_all(&cancel()).content.unwrap(), on_disk());

        service.create(Some(&hammer_request()), &cancel());
        assert_eq!(service.get_all(&cancel()).content.unwrap(), on_disk());

        let mut cheaper = saw.clone();
        cheaper.price = Decimal::new(1999, 2);
        service.update(Some(&cheaper), &cancel());
        assert_eq!(service.get_all(&cancel()).content.unwrap(), on_disk());

        service.delete(Some(&saw), &cancel());
        assert_eq!(service.get_all(&cancel()).content.unwrap(), on_disk());
        assert_eq!(on_disk().len(), 1);
    }
}
