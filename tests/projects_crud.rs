#[cfg(test)]
mod tests {
    use taskmesh::db::db::Db;
    use taskmesh::db::projects::Projects;
    use taskmesh::libs::error::Error;
    use taskmesh::libs::project::ProjectDraft;
    use test_context::{test_context, TestContext};

    struct ProjectTestContext {
        projects: Projects,
    }

    impl TestContext for ProjectTestContext {
        fn setup() -> Self {
            let db = Db::in_memory().unwrap();
            ProjectTestContext {
                projects: Projects::new(&db),
            }
        }
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_insert_and_fetch(ctx: &mut ProjectTestContext) {
        ctx.projects.insert(&ProjectDraft::new("Project 1", "First")).unwrap();
        ctx.projects.insert(&ProjectDraft::new("Project 2", "Second")).unwrap();

        let projects = ctx.projects.fetch().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Project 1");
        assert_eq!(projects[1].description, "Second");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_find_by_id(ctx: &mut ProjectTestContext) {
        let created = ctx.projects.insert(&ProjectDraft::new("Test Project", "")).unwrap();

        let found = ctx.projects.find_by_id(created.id).unwrap();
        assert_eq!(found, created);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_find_missing_is_not_found(ctx: &mut ProjectTestContext) {
        let err = ctx.projects.find_by_id(999).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Project not found");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_update_keeps_id(ctx: &mut ProjectTestContext) {
        let created = ctx.projects.insert(&ProjectDraft::new("Old", "old description")).unwrap();

        let updated = ctx.projects.update(created.id, &ProjectDraft::new("New", "new description")).unwrap();
        assert_eq!(updated.id, created.id);

        let stored = ctx.projects.find_by_id(created.id).unwrap();
        assert_eq!(stored.title, "New");
        assert_eq!(stored.description, "new description");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_update_missing(ctx: &mut ProjectTestContext) {
        let result = ctx.projects.update(42, &ProjectDraft::new("Nope", ""));
        assert!(matches!(result, Err(Error::NotFound { id: 42, .. })));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_delete_is_idempotent(ctx: &mut ProjectTestContext) {
        let created = ctx.projects.insert(&ProjectDraft::new("Doomed", "")).unwrap();

        assert_eq!(ctx.projects.delete(created.id).unwrap(), 1);
        assert_eq!(ctx.projects.delete(created.id).unwrap(), 0);
        assert!(ctx.projects.get_by_id(created.id).unwrap().is_none());
    }
}
