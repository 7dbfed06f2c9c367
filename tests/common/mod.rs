//! Test infrastructure for integration tests
//!
//! Provides isolated database setup/teardown and seeding helpers.
//! Each test gets its own database instance to ensure no shared state.

use std::path::PathBuf;
use todolists::commands::TodosCommand;
use todolists_db::Database;

/// Test context containing an isolated database and temp directory
pub struct TestContext {
    pub db: Database,
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an isolated on-disk database.
    ///
    /// Each call creates a uniquely named temp directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub async fn new() -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "tdl-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));

        let db = Database::connect(&temp_dir).await.unwrap();
        db.init().await.unwrap();

        Self { db, temp_dir }
    }

    /// Insert a task list.
    pub async fn add_list(&self, id: &str, title: &str, colour: &str) {
        self.add_list_flagged(id, title, colour, false).await;
    }

    /// Insert a task list with an explicit soft-delete flag.
    pub async fn add_list_flagged(&self, id: &str, title: &str, colour: &str, deleted: bool) {
        let query = format!(
            r#"CREATE todo_list:{} SET title = "{}", colour = "{}", deleted = {}"#,
            id, title, colour, deleted
        );
        self.db.client().query(&query).await.unwrap().check().unwrap();
    }

    /// Insert an item into a list.
    pub async fn add_item(&self, id: &str, list_id: &str, title: &str, priority: i64) {
        self.add_item_flagged(id, list_id, title, priority, false)
            .await;
    }

    /// Insert an item with an explicit soft-delete flag.
    pub async fn add_item_flagged(
        &self,
        id: &str,
        list_id: &str,
        title: &str,
        priority: i64,
        deleted: bool,
    ) {
        let query = format!(
            r#"CREATE todo_item:{} SET list = todo_list:{}, title = "{}", priority = {}, deleted = {}"#,
            id, list_id, title, priority, deleted
        );
        self.db.client().query(&query).await.unwrap().check().unwrap();
    }

    /// Seed two lists used by most query tests.
    ///
    /// - `groceries` "Groceries" (Green): Buy shopping list (1), Shop for bread (2), Milk (3)
    /// - `chores` "Chores" (Blue): Clean house (2), Mow lawn (0)
    pub async fn seed(&self) {
        self.add_list("groceries", "Groceries", "Green").await;
        self.add_list("chores", "Chores", "Blue").await;

        self.add_item("g1", "groceries", "Buy shopping list", 1).await;
        self.add_item("g2", "groceries", "Shop for bread", 2).await;
        self.add_item("g3", "groceries", "Milk", 3).await;
        self.add_item("c1", "chores", "Clean house", 2).await;
        self.add_item("c2", "chores", "Mow lawn", 0).await;
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

/// Create a TodosCommand with the given filters.
pub fn todos_cmd(text: Option<&str>, priority: Option<&str>) -> TodosCommand {
    TodosCommand {
        text: text.map(String::from),
        priority: priority.map(String::from),
        exclude_deleted: false,
        json: false,
    }
}
