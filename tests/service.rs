#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tasks::db::csv_store::CsvRepository;
    use tasks::db::json_store::JsonRepository;
    use tasks::db::tasks::SqlRepository;
    use tasks::libs::error::{Operation, TaskError};
    use tasks::libs::service::TaskService;
    use tasks::libs::task::{TaskField, TaskFilter, TaskSelector};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use uuid::Uuid;

    struct ServiceContext {
        temp_dir: TempDir,
    }

    impl TestContext for ServiceContext {
        fn setup() -> Self {
            ServiceContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ServiceContext {
        fn services(&self) -> Vec<TaskService> {
            vec![
                TaskService::new(Box::new(CsvRepository::new(self.temp_dir.path().join("tasks.csv")))),
                TaskService::new(Box::new(JsonRepository::new(self.temp_dir.path().join("tasks.json")))),
                TaskService::new(Box::new(SqlRepository::open_in_memory().unwrap())),
            ]
        }
    }

    #[test_context(ServiceContext)]
    #[test]
    fn test_create_defaults(ctx: &mut ServiceContext) {
        for service in ctx.services() {
            let before = Utc::now();
            let due = before + Duration::days(1);
            let task = service.create("buy milk", due).unwrap();

            assert!(task.id.is_some());
            assert!(!task.is_completed);
            assert_eq!(task.description, "buy milk");
            assert_eq!(task.due_date, due);
            assert!(task.created_at >= before && task.created_at <= Utc::now());
        }
    }

    #[test_context(ServiceContext)]
    #[test]
    fn test_create_rejects_blank_description(ctx: &mut ServiceContext) {
        for service in ctx.services() {
            for description in ["", "   "] {
                let err = service.create(description, Utc::now()).unwrap_err();
                assert_eq!(err.op, Operation::Create);
                assert!(matches!(err.kind(), TaskError::Validation(_)));
            }

            let listed = service.list(None, Some(TaskFilter::new(true))).unwrap();
            assert!(listed.is_empty(), "nothing may be persisted");
        }
    }

    #[test_context(ServiceContext)]
    #[test]
    fn test_errors_carry_operation(ctx: &mut ServiceContext) {
        for service in ctx.services() {
            let missing = Uuid::new_v4();
            service.create("buy milk", Utc::now()).unwrap();
            let before = service.list(None, Some(TaskFilter::new(true))).unwrap();

            let err = service.get_by_id(missing).unwrap_err();
            assert!(err.is_not_found());
            assert!(err.to_string().starts_with("GetByID: "), "{}", err);

            let err = service.complete(missing).unwrap_err();
            assert_eq!(err.op, Operation::Complete);
            assert!(err.is_not_found());
            assert_eq!(service.list(None, Some(TaskFilter::new(true))).unwrap(), before);

            let err = service.delete(missing).unwrap_err();
            assert_eq!(err.op, Operation::Delete);
            assert!(err.is_not_found());
            assert_eq!(service.list(None, Some(TaskFilter::new(true))).unwrap(), before);

            let err = service.get_by_partial_id("ffffffff").unwrap_err();
            assert!(err.to_string().starts_with("GetByPartialID: "), "{}", err);
        }
    }

    #[test_context(ServiceContext)]
    #[test]
    fn test_complete_and_delete(ctx: &mut ServiceContext) {
        for service in ctx.services() {
            let task = service.create("buy milk", Utc::now()).unwrap();
            let id = task.id.unwrap();

            let completed = service.complete(id).unwrap();
            assert!(completed.is_completed);
            assert!(service.get_by_id(id).unwrap().is_completed);

            // Completing again leaves it completed.
            assert!(service.complete(id).unwrap().is_completed);

            let deleted = service.delete(id).unwrap();
            assert_eq!(deleted.id, Some(id));
            assert!(service.get_by_id(id).unwrap_err().is_not_found());
            assert!(service.delete(id).unwrap_err().is_not_found());
        }
    }

    #[test_context(ServiceContext)]
    #[test]
    fn test_resolve_full_id_and_prefix(ctx: &mut ServiceContext) {
        for service in ctx.services() {
            let task = service.create("buy milk", Utc::now()).unwrap();

            assert_eq!(service.resolve(&task.id_string()).unwrap(), task);
            assert_eq!(service.resolve(&task.short_id()).unwrap(), task);
        }
    }

    #[test_context(ServiceContext)]
    #[test]
    fn test_buy_milk_pay_rent_scenario(ctx: &mut ServiceContext) {
        for service in ctx.services() {
            let now = Utc::now();
            let milk = service.create("buy milk", now + Duration::days(1)).unwrap();
            let rent = service.create("pay rent", now + Duration::days(7)).unwrap();

            let listed = service.list(None, None).unwrap();
            let ids: Vec<_> = listed.iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![milk.id, rent.id]);

            service.complete(milk.id.unwrap()).unwrap();

            let pending = service.list(None, None).unwrap();
            assert_eq!(pending.len(), 1);
            assert_eq!(pending[0].id, rent.id);
            assert_eq!(pending[0].description.as_deref(), Some("pay rent"));

            let all = service.list(Some(TaskSelector::new(&[TaskField::Description])), Some(TaskFilter::new(true))).unwrap();
            let descriptions: Vec<_> = all.iter().filter_map(|t| t.description.as_deref()).collect();
            assert_eq!(descriptions, vec!["buy milk", "pay rent"]);
        }
    }
}
