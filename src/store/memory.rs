/**
 * In-Memory Store
 *
 * Store implementation backed by process-local maps. Used by the test
 * suite as the injectable fake, and by local runs without a DATABASE_URL.
 *
 * All operations, including the user-deletion cascade, run under a single
 * write lock, so nothing here is ever partially applied. Data does not
 * survive a restart.
 */

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::articles::model::{Article, ArticlePatch, ArticleWithAuthor, NewArticle};
use crate::auth::users::{NewUser, User};
use crate::comments::model::{Comment, CommentWithAuthor, NewComment};
use crate::store::{Store, StoreError};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    articles: HashMap<Uuid, Article>,
    comments: HashMap<Uuid, Comment>,
    /// Article creation order, oldest first. Listing walks it backwards
    /// so paging is deterministic even when timestamps collide.
    article_order: Vec<Uuid>,
}

/// Store backed by in-memory maps
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn with_author(article: &Article, users: &HashMap<Uuid, User>) -> Option<ArticleWithAuthor> {
    let author = users.get(&article.user_id)?;
    Some(ArticleWithAuthor {
        id: article.id,
        title: article.title.clone(),
        description: article.description.clone(),
        content: article.content.clone(),
        user_id: article.user_id,
        slug: article.slug.clone(),
        views: article.views,
        comments: article.comments.clone(),
        created_at: article.created_at,
        updated_at: article.updated_at,
        author_name: author.name.clone(),
    })
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.username == new.username) {
            return Err(StoreError::Duplicate { field: "username" });
        }

        let user = User::from_new(new);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn update_user(
        &self,
        id: Uuid,
        username: String,
        name: String,
        avatar: Option<String>,
    ) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner
            .users
            .values()
            .any(|u| u.id != id && u.username == username)
        {
            return Err(StoreError::Duplicate { field: "username" });
        }

        let user = inner.users.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.username = username;
        user.name = name;
        if let Some(avatar) = avatar {
            user.avatar = Some(avatar);
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn delete_user_cascade(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }

        // Drop the user's articles, then every comment they wrote or that
        // sat on one of those articles.
        let removed_articles: HashSet<Uuid> = inner
            .articles
            .values()
            .filter(|a| a.user_id == id)
            .map(|a| a.id)
            .collect();
        inner.articles.retain(|_, a| a.user_id != id);
        inner.article_order.retain(|a| !removed_articles.contains(a));

        let removed_comments: HashSet<Uuid> = inner
            .comments
            .values()
            .filter(|c| c.user_id == id || removed_articles.contains(&c.article_id))
            .map(|c| c.id)
            .collect();
        inner
            .comments
            .retain(|_, c| !removed_comments.contains(&c.id));

        // Scrub dangling comment ids from surviving articles.
        for article in inner.articles.values_mut() {
            article.comments.retain(|c| !removed_comments.contains(c));
        }

        Ok(())
    }

    async fn create_article(&self, new: NewArticle) -> Result<Article, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.articles.values().any(|a| a.slug == new.slug) {
            return Err(StoreError::Duplicate { field: "slug" });
        }

        let article = Article::from_new(new);
        inner.article_order.push(article.id);
        inner.articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn list_articles(
        &self,
        search: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<ArticleWithAuthor>, u64), StoreError> {
        let inner = self.inner.read().await;
        let needle = search.map(str::to_lowercase);

        let matches: Vec<ArticleWithAuthor> = inner
            .article_order
            .iter()
            .rev()
            .filter_map(|id| inner.articles.get(id))
            .filter_map(|a| with_author(a, &inner.users))
            .filter(|a| match &needle {
                Some(q) => {
                    a.title.to_lowercase().contains(q) || a.author_name.to_lowercase().contains(q)
                }
                None => true,
            })
            .collect();

        let total = matches.len() as u64;
        let offset = (page.saturating_sub(1) as usize) * limit as usize;
        let articles = matches
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok((articles, total))
    }

    async fn article_by_id(&self, id: Uuid) -> Result<Option<ArticleWithAuthor>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .articles
            .get(&id)
            .and_then(|a| with_author(a, &inner.users)))
    }

    async fn view_article(&self, slug: &str) -> Result<Option<ArticleWithAuthor>, StoreError> {
        let mut inner = self.inner.write().await;

        let Some(id) = inner
            .articles
            .values()
            .find(|a| a.slug == slug)
            .map(|a| a.id)
        else {
            return Ok(None);
        };

        if let Some(article) = inner.articles.get_mut(&id) {
            article.views += 1;
        }

        Ok(inner
            .articles
            .get(&id)
            .and_then(|a| with_author(a, &inner.users)))
    }

    async fn articles_by_user(&self, user_id: Uuid) -> Result<Vec<ArticleWithAuthor>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .article_order
            .iter()
            .rev()
            .filter_map(|id| inner.articles.get(id))
            .filter(|a| a.user_id == user_id)
            .filter_map(|a| with_author(a, &inner.users))
            .collect())
    }

    async fn update_article(&self, id: Uuid, patch: ArticlePatch) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let article = inner.articles.get_mut(&id).ok_or(StoreError::NotFound)?;

        article.title = patch.title;
        article.description = patch.description;
        article.content = patch.content;
        article.updated_at = Utc::now();

        Ok(())
    }

    async fn delete_article(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;

        if inner.articles.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        inner.article_order.retain(|a| *a != id);
        inner.comments.retain(|_, c| c.article_id != id);

        Ok(())
    }

    async fn create_comment(&self, new: NewComment) -> Result<CommentWithAuthor, StoreError> {
        let mut inner = self.inner.write().await;

        if !inner.articles.contains_key(&new.article_id) {
            return Err(StoreError::NotFound);
        }

        let author = inner
            .users
            .get(&new.user_id)
            .cloned()
            .ok_or(StoreError::NotFound)?;

        let comment = Comment::from_new(new);
        if let Some(article) = inner.articles.get_mut(&comment.article_id) {
            article.comments.push(comment.id);
        }
        inner.comments.insert(comment.id, comment.clone());

        Ok(CommentWithAuthor {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            article_id: comment.article_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author_name: author.name,
            author_avatar: author.avatar,
            author_created_at: author.created_at,
        })
    }

    async fn comment_by_id(&self, id: Uuid) -> Result<Option<Comment>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.comments.get(&id).cloned())
    }

    async fn delete_comment(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;

        let comment = inner.comments.remove(&id).ok_or(StoreError::NotFound)?;
        if let Some(article) = inner.articles.get_mut(&comment.article_id) {
            article.comments.retain(|c| *c != id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            name: format!("{username} name"),
            password_hash: "hash".to_string(),
        }
    }

    fn new_article(title: &str, slug: &str, user_id: Uuid) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            description: "desc".to_string(),
            content: "content".to_string(),
            slug: slug.to_string(),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryStore::new();
        store.create_user(new_user("alice")).await.unwrap();

        let err = store.create_user(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { field: "username" }));
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("alice")).await.unwrap();

        store
            .create_article(new_article("Hello World", "hello-world", user.id))
            .await
            .unwrap();
        let err = store
            .create_article(new_article("Hello World", "hello-world", user.id))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Duplicate { field: "slug" }));
    }

    #[tokio::test]
    async fn test_view_article_increments_once_per_fetch() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("alice")).await.unwrap();
        store
            .create_article(new_article("Hello", "hello", user.id))
            .await
            .unwrap();

        let first = store.view_article("hello").await.unwrap().unwrap();
        let second = store.view_article("hello").await.unwrap().unwrap();

        assert_eq!(first.views, 1);
        assert_eq!(second.views, 2);
    }

    #[tokio::test]
    async fn test_comment_links_and_unlinks_from_article() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("alice")).await.unwrap();
        let article = store
            .create_article(new_article("Hello", "hello", user.id))
            .await
            .unwrap();

        let comment = store
            .create_comment(NewComment {
                content: "nice post".to_string(),
                user_id: user.id,
                article_id: article.id,
            })
            .await
            .unwrap();

        let linked = store.article_by_id(article.id).await.unwrap().unwrap();
        assert_eq!(linked.comments, vec![comment.id]);

        store.delete_comment(comment.id).await.unwrap();

        let unlinked = store.article_by_id(article.id).await.unwrap().unwrap();
        assert!(unlinked.comments.is_empty());
        assert!(store.comment_by_id(comment.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_comment_requires_existing_article() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("alice")).await.unwrap();

        let err = store
            .create_comment(NewComment {
                content: "orphan".to_string(),
                user_id: user.id,
                article_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_user_cascade_removes_articles_and_comments() {
        let store = MemoryStore::new();
        let alice = store.create_user(new_user("alice")).await.unwrap();
        let bob = store.create_user(new_user("bob")).await.unwrap();

        let alices = store
            .create_article(new_article("Mine", "mine", alice.id))
            .await
            .unwrap();
        let bobs = store
            .create_article(new_article("Theirs", "theirs", bob.id))
            .await
            .unwrap();

        // Alice comments on Bob's article; Bob comments on Alice's.
        let alice_comment = store
            .create_comment(NewComment {
                content: "from alice".to_string(),
                user_id: alice.id,
                article_id: bobs.id,
            })
            .await
            .unwrap();
        store
            .create_comment(NewComment {
                content: "from bob".to_string(),
                user_id: bob.id,
                article_id: alices.id,
            })
            .await
            .unwrap();

        store.delete_user_cascade(alice.id).await.unwrap();

        assert!(store.user_by_id(alice.id).await.unwrap().is_none());
        assert!(store.article_by_id(alices.id).await.unwrap().is_none());
        assert!(store
            .comment_by_id(alice_comment.id)
            .await
            .unwrap()
            .is_none());

        // Bob's article survives with Alice's comment id scrubbed.
        let surviving = store.article_by_id(bobs.id).await.unwrap().unwrap();
        assert!(surviving.comments.is_empty());
    }

    #[tokio::test]
    async fn test_list_articles_paginates_newest_first() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("alice")).await.unwrap();

        for i in 0..5 {
            store
                .create_article(new_article(&format!("Post {i}"), &format!("post-{i}"), user.id))
                .await
                .unwrap();
        }

        let (page1, total) = store.list_articles(None, 1, 2).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(page1.len(), 2);
        assert_eq!(page1[0].slug, "post-4");
        assert_eq!(page1[1].slug, "post-3");

        let (page3, _) = store.list_articles(None, 3, 2).await.unwrap();
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].slug, "post-0");
    }

    #[tokio::test]
    async fn test_search_matches_title_or_author() {
        let store = MemoryStore::new();
        let alice = store.create_user(new_user("alice")).await.unwrap();
        let bob = store.create_user(new_user("bob")).await.unwrap();

        store
            .create_article(new_article("Rust Tips", "rust-tips", alice.id))
            .await
            .unwrap();
        store
            .create_article(new_article("Gardening", "gardening", bob.id))
            .await
            .unwrap();

        let (by_title, total) = store.list_articles(Some("rust"), 1, 10).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(by_title[0].slug, "rust-tips");

        // "bob name" is Bob's display name.
        let (by_author, _) = store.list_articles(Some("BOB"), 1, 10).await.unwrap();
        assert_eq!(by_author[0].slug, "gardening");
    }
}
