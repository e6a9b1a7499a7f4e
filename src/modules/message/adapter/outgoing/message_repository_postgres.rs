use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, Set, Statement,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::message::adapter::outgoing::sea_orm_entity::messages::{
    self, ActiveModel, Column, Entity,
};
use crate::message::application::ports::outgoing::message_repository::{
    ConversationSummary, CreateMessageData, MessageRepository, MessageRepositoryError,
    MessageResult,
};
use crate::message::domain::{ConversationParty, MessageId, SenderRole};

// ============================================================================
// Query rows
// ============================================================================

#[derive(Debug, FromQueryResult)]
struct ConversationRow {
    counterpart_id: i32,
    name: String,
    last_message: String,
    last_message_at: sea_orm::prelude::DateTimeWithTimeZone,
}

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Latest message per lawyer this user has written to or heard from.
    fn user_conversations_stmt(user_id: UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT latest.counterpart_id, latest.name, latest.last_message, latest.last_message_at
            FROM (
                SELECT DISTINCT ON (m.lawyer_id)
                    m.lawyer_id AS counterpart_id,
                    l.name AS name,
                    m.content AS last_message,
                    m.created_at AS last_message_at
                FROM messages m
                INNER JOIN lawyers l ON l.id = m.lawyer_id
                WHERE m.user_id = $1
                ORDER BY m.lawyer_id, m.created_at DESC, m.id DESC
            ) latest
            ORDER BY latest.last_message_at DESC
            "#,
            vec![user_id.value().into()],
        )
    }

    fn lawyer_conversations_stmt(lawyer_id: LawyerId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT latest.counterpart_id, latest.name, latest.last_message, latest.last_message_at
            FROM (
                SELECT DISTINCT ON (m.user_id)
                    m.user_id AS counterpart_id,
                    u.name AS name,
                    m.content AS last_message,
                    m.created_at AS last_message_at
                FROM messages m
                INNER JOIN users u ON u.id = m.user_id
                WHERE m.lawyer_id = $1
                ORDER BY m.user_id, m.created_at DESC, m.id DESC
            ) latest
            ORDER BY latest.last_message_at DESC
            "#,
            vec![lawyer_id.value().into()],
        )
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageResult, MessageRepositoryError> {
        let model = ActiveModel {
            user_id: Set(data.user_id.value()),
            lawyer_id: Set(data.lawyer_id.value()),
            sender_role: Set(data.sender_role.as_str().to_string()),
            content: Set(data.content),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_result(inserted)
    }

    async fn find_by_id(
        &self,
        id: MessageId,
    ) -> Result<Option<MessageResult>, MessageRepositoryError> {
        Entity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .transpose()
    }

    async fn list_history(
        &self,
        user_id: UserId,
        lawyer_id: LawyerId,
    ) -> Result<Vec<MessageResult>, MessageRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::LawyerId.eq(lawyer_id.value()))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_result)
            .collect()
    }

    async fn update_content(
        &self,
        id: MessageId,
        content: String,
    ) -> Result<MessageResult, MessageRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::Content, Expr::value(content))
            .filter(Column::Id.eq(id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        match updated.into_iter().next() {
            Some(model) => model_to_result(model),
            None => Err(MessageRepositoryError::NotFound),
        }
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), MessageRepositoryError> {
        let result = Entity::delete_by_id(id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list_conversations(
        &self,
        party: ConversationParty,
    ) -> Result<Vec<ConversationSummary>, MessageRepositoryError> {
        let stmt = match party {
            ConversationParty::User(id) => Self::user_conversations_stmt(id),
            ConversationParty::Lawyer(id) => Self::lawyer_conversations_stmt(id),
        };

        let rows = ConversationRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let (user_id, lawyer_id) = match party {
                    ConversationParty::User(_) => {
                        (None, Some(LawyerId::from(row.counterpart_id)))
                    }
                    ConversationParty::Lawyer(_) => (Some(UserId::from(row.counterpart_id)), None),
                };
                ConversationSummary {
                    user_id,
                    lawyer_id,
                    name: row.name,
                    last_message: row.last_message,
                    timestamp: row.last_message_at.into(),
                }
            })
            .collect())
    }
}

fn model_to_result(model: messages::Model) -> Result<MessageResult, MessageRepositoryError> {
    let sender_role = model
        .sender_role
        .parse::<SenderRole>()
        .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

    Ok(MessageResult {
        id: MessageId::from(model.id),
        user_id: UserId::from(model.user_id),
        lawyer_id: LawyerId::from(model.lawyer_id),
        sender_role,
        content: model.content,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use maplit::btreemap;
    use std::collections::BTreeMap;
    use sea_orm::sea_query::Values;
    use sea_orm::{MockDatabase, MockExecResult, Value};

    /// Statements a mock connection received, once the repository has let go of it.
    fn logged_statements(
        repo: MessageRepositoryPostgres,
        db: Arc<DatabaseConnection>,
    ) -> Vec<Statement> {
        drop(repo);
        let db = Arc::try_unwrap(db).expect("repository released the connection");
        db.into_transaction_log()
            .into_iter()
            .flat_map(|txn| txn.statements().to_vec())
            .collect()
    }

    fn message_model(id: i32, role: &str, content: &str) -> messages::Model {
        messages::Model {
            id,
            user_id: 3,
            lawyer_id: 7,
            sender_role: role.to_string(),
            content: content.to_string(),
            created_at: (Utc::now() + Duration::seconds(id as i64)).into(),
        }
    }

    #[tokio::test]
    async fn test_create_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![message_model(1, "lawyer", "Please send the lease")]])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let created = repo
            .create_message(CreateMessageData {
                user_id: UserId::from(3),
                lawyer_id: LawyerId::from(7),
                sender_role: SenderRole::Lawyer,
                content: "Please send the lease".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.sender_role, SenderRole::Lawyer);
        assert_eq!(created.lawyer_id, LawyerId::from(7));
    }

    #[tokio::test]
    async fn test_history_keeps_query_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                message_model(1, "user", "Hello"),
                message_model(2, "lawyer", "Hi"),
            ]])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let history = repo
            .list_history(UserId::from(3), LawyerId::from(7))
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert!(history[0].created_at < history[1].created_at);
    }

    #[tokio::test]
    async fn test_unknown_stored_role_is_a_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![message_model(1, "admin", "?")]])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_by_id(MessageId::from(1)).await;

        assert!(matches!(result, Err(MessageRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_update_missing_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<messages::Model>::new()])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let result = repo.update_content(MessageId::from(9), "edited".into()).await;

        assert_eq!(result.unwrap_err(), MessageRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_message(MessageId::from(1)).await.is_ok());
        assert_eq!(
            repo.delete_message(MessageId::from(1)).await.unwrap_err(),
            MessageRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_lawyer_conversations_name_users() {
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                btreemap! {
                    "counterpart_id" => Value::Int(Some(4)),
                    "name" => Value::String(Some(Box::new("Asha".into()))),
                    "last_message" => Value::String(Some(Box::new("Thanks".into()))),
                    "last_message_at" => Value::ChronoDateTimeWithTimeZone(Some(Box::new(now))),
                },
                btreemap! {
                    "counterpart_id" => Value::Int(Some(3)),
                    "name" => Value::String(Some(Box::new("Ravi".into()))),
                    "last_message" => Value::String(Some(Box::new("See you".into()))),
                    "last_message_at" => Value::ChronoDateTimeWithTimeZone(Some(Box::new(
                        now - Duration::hours(1),
                    ))),
                },
            ]])
            .into_connection();

        let db = Arc::new(db);
        let repo = MessageRepositoryPostgres::new(Arc::clone(&db));
        let conversations = repo
            .list_conversations(ConversationParty::Lawyer(LawyerId::from(7)))
            .await
            .unwrap();

        assert_eq!(conversations.len(), 2);
        assert_eq!(conversations[0].user_id, Some(UserId::from(4)));
        assert_eq!(conversations[0].lawyer_id, None);
        assert_eq!(conversations[1].name, "Ravi");

        let statements = logged_statements(repo, db);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.contains("SELECT DISTINCT ON (m.user_id)"));
        assert!(sql.contains("INNER JOIN users u ON u.id = m.user_id"));
        assert!(sql.contains("WHERE m.lawyer_id = $1"));
        assert!(sql.contains("ORDER BY m.user_id, m.created_at DESC, m.id DESC"));
        assert!(sql.contains("ORDER BY latest.last_message_at DESC"));
        assert_eq!(statements[0].values, Some(Values(vec![Value::Int(Some(7))])));
    }

    #[tokio::test]
    async fn test_user_conversations_group_by_lawyer() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<BTreeMap<&str, Value>>::new()])
                .into_connection(),
        );
        let repo = MessageRepositoryPostgres::new(Arc::clone(&db));

        let conversations = repo
            .list_conversations(ConversationParty::User(UserId::from(3)))
            .await
            .unwrap();
        assert!(conversations.is_empty());

        let statements = logged_statements(repo, db);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.contains("SELECT DISTINCT ON (m.lawyer_id)"));
        assert!(sql.contains("INNER JOIN lawyers l ON l.id = m.lawyer_id"));
        assert!(sql.contains("WHERE m.user_id = $1"));
        assert!(sql.contains("ORDER BY latest.last_message_at DESC"));
        assert_eq!(statements[0].values, Some(Values(vec![Value::Int(Some(3))])));
    }

    #[tokio::test]
    async fn test_conversation_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".into())])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .list_conversations(ConversationParty::User(UserId::from(3)))
            .await;

        assert!(matches!(result, Err(MessageRepositoryError::DatabaseError(_))));
    }
}
