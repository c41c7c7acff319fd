use crate::domain::article::FindBySlugError;

pub fn map_sqlx(err: sqlx::Error) -> FindBySlugError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => {
                FindBySlugError::Persistence(format!("database error {code}: {}", db_err.message()))
            }
            None => FindBySlugError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::PoolTimedOut => {
            FindBySlugError::Persistence("timed out acquiring a database connection".into())
        }
        _ => FindBySlugError::Persistence(err.to_string()),
    }
}
