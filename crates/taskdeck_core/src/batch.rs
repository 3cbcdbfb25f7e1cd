use crate::{RequestId, RequestTask, TaskError, TaskState};

/// Caller-chosen limits for one scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeParams {
    pub post_limit: u32,
    pub comment_limit_per_post: u32,
}

impl Default for ScrapeParams {
    fn default() -> Self {
        Self {
            post_limit: 5,
            comment_limit_per_post: 10,
        }
    }
}

/// Post as delivered by the service; any field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpstreamPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<i64>,
    pub comments: Option<Vec<UpstreamComment>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpstreamComment {
    pub id: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub score: Option<i64>,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub url: String,
    /// Epoch seconds.
    pub created_at: i64,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub author: Option<String>,
    pub score: i64,
    pub created_at: i64,
}

/// Normalizes upstream posts, generating random identifiers where missing.
///
/// Generated ids are not stable across fetches of the same post.
pub fn normalize_posts(raw: Vec<UpstreamPost>) -> Vec<Post> {
    normalize_posts_with(raw, || uuid::Uuid::new_v4().to_string())
}

/// Like [`normalize_posts`] with a caller-provided identifier source.
pub fn normalize_posts_with(
    raw: Vec<UpstreamPost>,
    mut next_id: impl FnMut() -> String,
) -> Vec<Post> {
    raw.into_iter()
        .map(|post| Post {
            id: present(post.id).unwrap_or_else(&mut next_id),
            title: post.title.unwrap_or_default(),
            body: post.body.unwrap_or_default(),
            url: post.url.unwrap_or_default(),
            created_at: post.created_at.unwrap_or_default(),
            comments: post
                .comments
                .unwrap_or_default()
                .into_iter()
                .map(|comment| Comment {
                    id: present(comment.id).unwrap_or_else(&mut next_id),
                    body: comment.body.unwrap_or_default(),
                    author: comment.author,
                    score: comment.score.unwrap_or_default(),
                    created_at: comment.created_at.unwrap_or_default(),
                })
                .collect(),
        })
        .collect()
}

fn present(id: Option<String>) -> Option<String> {
    id.filter(|id| !id.trim().is_empty())
}

/// View branch derived from a [`BatchFetchTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchViewState<'a> {
    /// A call is outstanding; suppresses the other three.
    Pending,
    Empty,
    Populated(&'a [Post]),
    Errored(&'a TaskError),
}

/// Request task whose success value is a normalized collection of posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFetchTask {
    task: RequestTask<ScrapeParams, Vec<Post>>,
}

impl BatchFetchTask {
    pub fn new(name: &'static str) -> Self {
        Self {
            task: RequestTask::new(name),
        }
    }

    pub fn task(&self) -> &RequestTask<ScrapeParams, Vec<Post>> {
        &self.task
    }

    pub fn submit(&mut self, params: ScrapeParams) -> Option<RequestId> {
        self.task.submit(params)
    }

    pub fn complete(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<UpstreamPost>, TaskError>,
    ) -> bool {
        self.complete_with(request_id, result, normalize_posts)
    }

    /// Like [`BatchFetchTask::complete`] with a caller-provided normalizer.
    pub fn complete_with(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<UpstreamPost>, TaskError>,
        normalize: impl FnOnce(Vec<UpstreamPost>) -> Vec<Post>,
    ) -> bool {
        self.task.complete(request_id, result.map(normalize))
    }

    pub fn reset(&mut self) {
        self.task.reset();
    }

    pub fn view_state(&self) -> BatchViewState<'_> {
        match self.task.state() {
            TaskState::Pending { .. } => BatchViewState::Pending,
            TaskState::Idle => BatchViewState::Empty,
            TaskState::Succeeded(posts) if posts.is_empty() => BatchViewState::Empty,
            TaskState::Succeeded(posts) => BatchViewState::Populated(posts),
            TaskState::Failed(err) => BatchViewState::Errored(err),
        }
    }
}
