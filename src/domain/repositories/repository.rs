pub type RepositoryResult<T> = Result<T, surrealdb::Error>;
