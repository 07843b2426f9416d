use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_TAG_CONTENT: &str = "article_tags_content_key";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_PARENT: &str = "comments_parent_Id_fkey";

const FOREIGN_KEY_VIOLATION: &str = "23503";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_TAG_CONTENT => DomainError::Conflict("tag already exists".into()),
                    CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_COMMENT_PARENT => DomainError::NotFound("parent comment not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    FOREIGN_KEY_VIOLATION => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// On deletes a foreign-key violation means other rows still point at the
/// target.
pub fn map_sqlx_delete(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return DomainError::Conflict("record is still referenced".into());
        }
    }
    map_sqlx(err)
}
