#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tasks::db::csv_store::CsvRepository;
    use tasks::db::json_store::JsonRepository;
    use tasks::db::repository::Repository;
    use tasks::db::tasks::SqlRepository;
    use tasks::libs::error::TaskError;
    use tasks::libs::task::{Task, TaskField, TaskFilter, TaskSelector};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use uuid::Uuid;

    struct BackendContext {
        temp_dir: TempDir,
    }

    impl TestContext for BackendContext {
        fn setup() -> Self {
            BackendContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl BackendContext {
        /// One fresh repository per backend, each on its own file.
        fn backends(&self) -> Vec<(&'static str, Box<dyn Repository>)> {
            let dir = self.temp_dir.path();
            vec![
                ("csv", Box::new(CsvRepository::new(dir.join("tasks.csv"))) as Box<dyn Repository>),
                ("json", Box::new(JsonRepository::new(dir.join("tasks.json")))),
                ("sql", Box::new(SqlRepository::open(dir.join("tasks.db")).unwrap())),
            ]
        }
    }

    fn saved(repo: &dyn Repository, description: &str) -> Task {
        let mut task = Task::new(description, Utc::now() + Duration::days(1));
        repo.save(&mut task).unwrap();
        task
    }

    fn with_id(id: &str, description: &str) -> Task {
        let mut task = Task::new(description, Utc::now());
        task.id = Some(Uuid::parse_str(id).unwrap());
        task
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_save_assigns_id_and_round_trips(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let task = saved(repo.as_ref(), "buy milk");
            let id = task.id.expect(name);

            let fetched = repo.get_by_id(id).unwrap();
            assert_eq!(fetched, task, "{}", name);
            assert!(!fetched.is_completed, "{}", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_save_keeps_preassigned_id(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let mut task = with_id("2b0c6a5e-4f7d-4c1b-9a33-0d2f8e6b7c11", "pay rent");
            task.is_completed = true;
            repo.save(&mut task).unwrap();

            let fetched = repo.get_by_id(task.id.unwrap()).unwrap();
            assert!(fetched.is_completed, "{} must persist is_completed on save", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_save_duplicate_id_fails(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let task = saved(repo.as_ref(), "buy milk");
            let mut copy = task.clone();

            match repo.save(&mut copy) {
                Err(TaskError::AlreadyExists(id)) => assert_eq!(Some(id), task.id, "{}", name),
                other => panic!("{}: expected AlreadyExists, got {:?}", name, other),
            }
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_get_unknown_id_is_not_found(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            saved(repo.as_ref(), "buy milk");

            let result = repo.get_by_id(Uuid::new_v4());
            assert!(matches!(result, Err(TaskError::NotFound(_))), "{}: {:?}", name, result);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_list_filter_and_order(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let first = saved(repo.as_ref(), "first");
            let mut second = saved(repo.as_ref(), "second");
            let third = saved(repo.as_ref(), "third");

            second.is_completed = true;
            repo.update(&second).unwrap();

            let pending = repo.list(&TaskSelector::all(), &TaskFilter::new(false)).unwrap();
            let ids: Vec<_> = pending.iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![first.id, third.id], "{}", name);

            let all = repo.list(&TaskSelector::all(), &TaskFilter::new(true)).unwrap();
            let ids: Vec<_> = all.iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![first.id, second.id, third.id], "{}", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_list_selector_only_projects(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let task = saved(repo.as_ref(), "buy milk");

            let selector = TaskSelector::new(&[TaskField::Description]);
            let listed = repo.list(&selector, &TaskFilter::default()).unwrap();

            assert_eq!(listed.len(), 1, "{}", name);
            assert_eq!(listed[0].description.as_deref(), Some("buy milk"), "{}", name);
            assert_eq!(listed[0].id, None, "{}", name);
            assert_eq!(listed[0].due_date, None, "{}", name);

            let everything = repo.list(&TaskSelector::default(), &TaskFilter::default()).unwrap();
            assert_eq!(everything[0].id, task.id, "{}: empty selector selects every field", name);
            assert_eq!(everything[0].due_date, Some(task.due_date), "{}", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_list_empty_store(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let listed = repo.list(&TaskSelector::all(), &TaskFilter::new(true)).unwrap();
            assert!(listed.is_empty(), "{}", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_update_replaces_whole_record(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let mut task = saved(repo.as_ref(), "buy milk");
            task.description = "buy oat milk".to_string();
            task.due_date = task.due_date + Duration::days(2);
            task.is_completed = true;
            repo.update(&task).unwrap();

            assert_eq!(repo.get_by_id(task.id.unwrap()).unwrap(), task, "{}", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_update_unknown_is_not_found(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let ghost = with_id("0f000000-0000-4000-8000-000000000000", "ghost");

            let result = repo.update(&ghost);
            assert!(matches!(result, Err(TaskError::NotFound(_))), "{}: {:?}", name, result);

            let unsaved = Task::new("never saved", Utc::now());
            assert!(matches!(repo.update(&unsaved), Err(TaskError::NotFound(_))), "{}", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_delete_twice_is_not_found(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let task = saved(repo.as_ref(), "buy milk");
            let keep = saved(repo.as_ref(), "pay rent");

            repo.delete(&task).unwrap();
            assert!(matches!(repo.get_by_id(task.id.unwrap()), Err(TaskError::NotFound(_))), "{}", name);
            assert!(matches!(repo.delete(&task), Err(TaskError::NotFound(_))), "{}", name);

            assert_eq!(repo.get_by_id(keep.id.unwrap()).unwrap(), keep, "{}", name);
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_partial_id_unique_and_ambiguous(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            let mut a = with_id("aaaa1111-0000-4000-8000-000000000001", "a");
            let mut b = with_id("aaaa2222-0000-4000-8000-000000000002", "b");
            let mut c = with_id("cccc3333-0000-4000-8000-000000000003", "c");
            for task in [&mut a, &mut b, &mut c] {
                repo.save(task).unwrap();
            }

            assert_eq!(repo.get_by_partial_id("aaaa1111").unwrap().id, a.id, "{}", name);
            assert_eq!(repo.get_by_partial_id("AAAA2222").unwrap().id, b.id, "{}", name);
            assert_eq!(repo.get_by_partial_id("cccc3333").unwrap().id, c.id, "{}", name);

            match repo.get_by_partial_id("aaaa") {
                Err(TaskError::AmbiguousMatch { prefix, matches }) => {
                    assert_eq!(prefix, "aaaa", "{}", name);
                    assert_eq!(matches, 2, "{}", name);
                }
                other => panic!("{}: expected AmbiguousMatch, got {:?}", name, other),
            }

            assert!(matches!(repo.get_by_partial_id("ffff"), Err(TaskError::NotFound(_))), "{}", name);
            assert!(
                matches!(repo.get_by_partial_id(""), Err(TaskError::AmbiguousMatch { matches: 3, .. })),
                "{}",
                name
            );
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_empty_prefix_matches_every_task(ctx: &mut BackendContext) {
        for (name, repo) in ctx.backends() {
            assert!(matches!(repo.get_by_partial_id(""), Err(TaskError::NotFound(_))), "{}", name);

            let only = saved(repo.as_ref(), "buy milk");
            assert_eq!(repo.get_by_partial_id("").unwrap(), only, "{}", name);
            assert_eq!(repo.get_by_partial_id("  ").unwrap(), only, "{}", name);

            saved(repo.as_ref(), "pay rent");
            assert!(
                matches!(repo.get_by_partial_id(""), Err(TaskError::AmbiguousMatch { matches: 2, .. })),
                "{}",
                name
            );
        }
    }

    #[test_context(BackendContext)]
    #[test]
    fn test_state_survives_reopen(ctx: &mut BackendContext) {
        let ids: Vec<_> = ctx
            .backends()
            .into_iter()
            .map(|(_, repo)| saved(repo.as_ref(), "buy milk").id)
            .collect();

        for ((name, repo), id) in ctx.backends().into_iter().zip(ids) {
            assert_eq!(repo.get_by_id(id.unwrap()).unwrap().description, "buy milk", "{}", name);
        }
    }
}
