use std::future::Future;

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::test::TestDto,
    server::{
        data::test::TestRepository,
        error::{test::TestAccessError, Error},
        model::test::into_model,
    },
};

/// Persistence capabilities the test access service requires.
///
/// Every method resolves to a `Send` future so the service can run inside Axum handlers.
pub trait TestStore {
    /// Returns every test created by `author_id`
    fn list_by_author(
        &self,
        author_id: &str,
    ) -> impl Future<Output = Result<Vec<TestDto>, Error>> + Send;

    /// Returns the test with `test_id` only if it was created by `author_id`
    fn find_by_author_and_id(
        &self,
        author_id: &str,
        test_id: &str,
    ) -> impl Future<Output = Result<Option<TestDto>, Error>> + Send;

    /// Returns the test with `test_id` regardless of its author
    fn find_by_id(&self, test_id: &str)
        -> impl Future<Output = Result<Option<TestDto>, Error>> + Send;

    /// Inserts the test if it has no ID, assigning one, otherwise replaces the stored test
    ///
    /// Replacing a test that no longer exists fails with [`TestAccessError::NotFound`].
    fn save(&self, test: TestDto) -> impl Future<Output = Result<TestDto, Error>> + Send;

    /// Deletes the test with `test_id` created by `author_id` as a single atomic unit
    ///
    /// Succeeds without effect if no such test exists.
    fn delete_by_author_and_id(
        &self,
        author_id: &str,
        test_id: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// [`TestStore`] backed by the application database
pub struct DbTestStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DbTestStore<'a> {
    /// Creates a new instance of [`DbTestStore`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TestStore for DbTestStore<'_> {
    async fn list_by_author(&self, author_id: &str) -> Result<Vec<TestDto>, Error> {
        let tests = TestRepository::new(self.db)
            .get_many_by_author_id(author_id)
            .await?;

        Ok(tests.into_iter().map(TestDto::from).collect())
    }

    async fn find_by_author_and_id(
        &self,
        author_id: &str,
        test_id: &str,
    ) -> Result<Option<TestDto>, Error> {
        let test = TestRepository::new(self.db)
            .find_by_author_and_id(author_id, test_id)
            .await?;

        Ok(test.map(TestDto::from))
    }

    async fn find_by_id(&self, test_id: &str) -> Result<Option<TestDto>, Error> {
        let test = TestRepository::new(self.db).find_by_id(test_id).await?;

        Ok(test.map(TestDto::from))
    }

    async fn save(&self, test: TestDto) -> Result<TestDto, Error> {
        let test_repo = TestRepository::new(self.db);

        match test.id.clone() {
            None => {
                let model = into_model(test, Uuid::new_v4().to_string())?;
                let created = test_repo.create(model).await?;

                Ok(TestDto::from(created))
            }
            Some(test_id) => {
                let model = into_model(test, test_id)?;
                let replaced = test_repo
                    .replace(model)
                    .await?
                    .ok_or_else(TestAccessError::not_found)?;

                Ok(TestDto::from(replaced))
            }
        }
    }

    async fn delete_by_author_and_id(&self, author_id: &str, test_id: &str) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let result = TestRepository::new(&txn)
            .delete_by_author_and_id(author_id, test_id)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            author_id = %author_id,
            test_id = %test_id,
            rows_affected = result.rows_affected,
            "Deleted test"
        );

        Ok(())
    }
}
