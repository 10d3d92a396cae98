/**
 * PostgreSQL Store
 *
 * Store implementation backed by a PostgreSQL connection pool. Queries use
 * runtime binds via `query_as`; uniqueness violations from the `username`
 * and `slug` indexes are mapped to `StoreError::Duplicate`.
 *
 * Multi-record operations (user cascade delete, article delete, comment
 * create/delete) run inside a transaction so a crash cannot leave the
 * comment-id lists on articles pointing at missing rows.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::articles::model::{Article, ArticlePatch, ArticleWithAuthor, NewArticle};
use crate::auth::users::{NewUser, User};
use crate::comments::model::{Comment, CommentWithAuthor, NewComment};
use crate::store::{Store, StoreError};

/// Store backed by PostgreSQL
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = User::from_new(new);

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, name, password_hash, avatar, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, username, name, password_hash, avatar, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash, avatar, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash, avatar, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_user(
        &self,
        id: Uuid,
        username: String,
        name: String,
        avatar: Option<String>,
    ) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $1, name = $2, avatar = COALESCE($3, avatar), updated_at = $4
            WHERE id = $5
            RETURNING id, username, name, password_hash, avatar, created_at, updated_at
            "#,
        )
        .bind(&username)
        .bind(&name)
        .bind(&avatar)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(StoreError::NotFound)
    }

    async fn delete_user_cascade(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        // Scrub this user's comment ids from other users' articles before
        // the comment rows disappear.
        sqlx::query(
            r#"
            UPDATE articles a
            SET comments = ARRAY(
                SELECT c FROM unnest(a.comments) AS c
                WHERE c NOT IN (SELECT id FROM comments WHERE user_id = $1)
            )
            WHERE a.comments && ARRAY(SELECT id FROM comments WHERE user_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM comments WHERE user_id = $1 OR article_id IN (SELECT id FROM articles WHERE user_id = $1)")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM articles WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        tx.commit().await?;
        Ok(())
    }

    async fn create_article(&self, new: NewArticle) -> Result<Article, StoreError> {
        let article = Article::from_new(new);

        let created = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles
                (id, title, description, content, user_id, slug, views, comments, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, title, description, content, user_id, slug, views, comments, created_at, updated_at
            "#,
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.content)
        .bind(article.user_id)
        .bind(&article.slug)
        .bind(article.views)
        .bind(&article.comments)
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_articles(
        &self,
        search: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<ArticleWithAuthor>, u64), StoreError> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE $1::text IS NULL
               OR a.title ILIKE '%' || $1 || '%'
               OR u.name ILIKE '%' || $1 || '%'
            "#,
        )
        .bind(search)
        .fetch_one(&self.pool)
        .await?;

        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

        let articles = sqlx::query_as::<_, ArticleWithAuthor>(
            r#"
            SELECT a.id, a.title, a.description, a.content, a.user_id, a.slug,
                   a.views, a.comments, a.created_at, a.updated_at,
                   u.name AS author_name
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE $1::text IS NULL
               OR a.title ILIKE '%' || $1 || '%'
               OR u.name ILIKE '%' || $1 || '%'
            ORDER BY a.created_at DESC, a.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search)
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((articles, total as u64))
    }

    async fn article_by_id(&self, id: Uuid) -> Result<Option<ArticleWithAuthor>, StoreError> {
        let article = sqlx::query_as::<_, ArticleWithAuthor>(
            r#"
            SELECT a.id, a.title, a.description, a.content, a.user_id, a.slug,
                   a.views, a.comments, a.created_at, a.updated_at,
                   u.name AS author_name
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    async fn view_article(&self, slug: &str) -> Result<Option<ArticleWithAuthor>, StoreError> {
        // Increment and read in one statement so the counter moves by
        // exactly 1 per fetch.
        let article = sqlx::query_as::<_, ArticleWithAuthor>(
            r#"
            UPDATE articles a
            SET views = a.views + 1
            FROM users u
            WHERE a.slug = $1 AND u.id = a.user_id
            RETURNING a.id, a.title, a.description, a.content, a.user_id, a.slug,
                      a.views, a.comments, a.created_at, a.updated_at,
                      u.name AS author_name
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    async fn articles_by_user(&self, user_id: Uuid) -> Result<Vec<ArticleWithAuthor>, StoreError> {
        let articles = sqlx::query_as::<_, ArticleWithAuthor>(
            r#"
            SELECT a.id, a.title, a.description, a.content, a.user_id, a.slug,
                   a.views, a.comments, a.created_at, a.updated_at,
                   u.name AS author_name
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE a.user_id = $1
            ORDER BY a.created_at DESC, a.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }

    async fn update_article(&self, id: Uuid, patch: ArticlePatch) -> Result<(), StoreError> {
        let updated = sqlx::query(
            r#"
            UPDATE articles
            SET title = $1, description = $2, content = $3, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.content)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete_article(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        tx.commit().await?;
        Ok(())
    }

    async fn create_comment(&self, new: NewComment) -> Result<CommentWithAuthor, StoreError> {
        let comment = Comment::from_new(new);

        let mut tx = self.pool.begin().await?;

        // Lock the parent article so the comment-id append cannot race
        // a concurrent article delete.
        let article: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM articles WHERE id = $1 FOR UPDATE")
                .bind(comment.article_id)
                .fetch_optional(&mut *tx)
                .await?;

        if article.is_none() {
            return Err(StoreError::NotFound);
        }

        sqlx::query(
            r#"
            INSERT INTO comments (id, content, user_id, article_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(comment.user_id)
        .bind(comment.article_id)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE articles SET comments = array_append(comments, $1) WHERE id = $2")
            .bind(comment.id)
            .bind(comment.article_id)
            .execute(&mut *tx)
            .await?;

        let populated = sqlx::query_as::<_, CommentWithAuthor>(
            r#"
            SELECT c.id, c.content, c.user_id, c.article_id, c.created_at, c.updated_at,
                   u.name AS author_name, u.avatar AS author_avatar,
                   u.created_at AS author_created_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#,
        )
        .bind(comment.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(populated)
    }

    async fn comment_by_id(&self, id: Uuid) -> Result<Option<Comment>, StoreError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, content, user_id, article_id, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn delete_comment(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let article_id: Option<Uuid> =
            sqlx::query_scalar("SELECT article_id FROM comments WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(article_id) = article_id else {
            return Err(StoreError::NotFound);
        };

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE articles SET comments = array_remove(comments, $1) WHERE id = $2")
            .bind(id)
            .bind(article_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
