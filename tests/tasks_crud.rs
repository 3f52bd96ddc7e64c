#[cfg(test)]
mod tests {
    use taskmesh::db::db::Db;
    use taskmesh::db::tasks::Tasks;
    use taskmesh::libs::error::Error;
    use taskmesh::libs::task::{TaskDraft, TaskFilter};
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let db = Db::in_memory().unwrap();
            TaskTestContext { tasks: Tasks::new(&db) }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_and_get(ctx: &mut TaskTestContext) {
        let draft = TaskDraft::new("Test task", "Description", "TODO").project(100).owner(1);
        let created = ctx.tasks.insert(&draft).unwrap();

        let stored = ctx.tasks.get_by_id(created.id).unwrap().unwrap();
        assert_eq!(stored, created);
        assert_eq!(stored.project_id, Some(100));
        assert_eq!(stored.user_id, Some(1));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_get_missing(ctx: &mut TaskTestContext) {
        assert!(ctx.tasks.get_by_id(12345).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_fetch_by_project(ctx: &mut TaskTestContext) {
        ctx.tasks.insert(&TaskDraft::new("A", "", "TODO").project(100)).unwrap();
        ctx.tasks.insert(&TaskDraft::new("B", "", "TODO").project(200)).unwrap();
        ctx.tasks.insert(&TaskDraft::new("C", "", "TODO").project(100)).unwrap();
        ctx.tasks.insert(&TaskDraft::new("D", "", "TODO")).unwrap();

        let all = ctx.tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 4);

        let titles: Vec<String> = ctx.tasks.fetch(TaskFilter::ByProject(100)).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["A", "C"]);

        assert!(ctx.tasks.fetch(TaskFilter::ByProject(300)).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(ctx: &mut TaskTestContext) {
        let created = ctx.tasks.insert(&TaskDraft::new("Old Title", "Old Desc", "TODO").project(1).owner(1)).unwrap();

        let patch = TaskDraft::new("New Title", "New Desc", "DONE").project(2).owner(7);
        let updated = ctx.tasks.update(created.id, &patch).unwrap();
        assert_eq!(updated.id, created.id);

        let stored = ctx.tasks.get_by_id(created.id).unwrap().unwrap();
        assert_eq!(stored.title, "New Title");
        assert_eq!(stored.description, "New Desc");
        assert_eq!(stored.status, "DONE");
        assert_eq!(stored.project_id, Some(2));
        assert_eq!(stored.user_id, Some(7));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update_missing(ctx: &mut TaskTestContext) {
        let result = ctx.tasks.update(99, &TaskDraft::new("x", "", ""));
        assert!(matches!(result, Err(Error::NotFound { id: 99, .. })));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let created = ctx.tasks.insert(&TaskDraft::new("Test task", "Comment", "TODO")).unwrap();

        assert_eq!(ctx.tasks.delete(created.id).unwrap(), 1);
        assert_eq!(ctx.tasks.delete(created.id).unwrap(), 0);

        let remaining = ctx.tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(remaining.len(), 0);
    }
}
