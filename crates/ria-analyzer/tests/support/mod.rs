//! In-memory implementations of the service ports.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use ria_core::{
    ARTIFACT_LINK, RepositoryDirectory, RepositoryInfo, WorkItemDetail, WorkItemId,
    WorkItemQuery, WorkItemRecord, work_item::{Relation, RelationAttributes},
};

/// Fake project: query results, work items by ID, and a repository list.
///
/// IDs without a record fail with a 404-style error. `repositories: None`
/// makes the directory fail.
#[derive(Default)]
pub struct FakeProject {
    pub query_result: Option<Result<Vec<WorkItemId>, String>>,
    pub items: HashMap<WorkItemId, WorkItemRecord>,
    pub repositories: Option<Vec<RepositoryInfo>>,
    pub fetch_delay: Duration,
    pub queries: Mutex<Vec<String>>,
    pub started: AtomicUsize,
    pub completed: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeProject {
    pub fn with_item(mut self, record: WorkItemRecord) -> Self {
        self.items.insert(record.id, record);
        self
    }

    pub fn with_repositories(mut self, repos: &[(&str, &str)]) -> Self {
        self.repositories = Some(
            repos
                .iter()
                .map(|(id, name)| RepositoryInfo {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn with_query_result(mut self, result: Result<Vec<WorkItemId>, &str>) -> Self {
        self.query_result = Some(result.map_err(str::to_string));
        self
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkItemQuery for FakeProject {
    type Error = io::Error;

    async fn query_ids(&self, query: &str) -> Result<Vec<WorkItemId>, Self::Error> {
        self.queries.lock().unwrap().push(query.to_string());
        self.query_result
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
            .map_err(io::Error::other)
    }
}

#[async_trait]
impl WorkItemDetail for FakeProject {
    type Error = io::Error;

    async fn work_item(&self, id: WorkItemId) -> Result<WorkItemRecord, Self::Error> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.items
            .get(&id)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("work item {id} not found")))
    }
}

#[async_trait]
impl RepositoryDirectory for FakeProject {
    type Error = io::Error;

    async fn repositories(&self) -> Result<Vec<RepositoryInfo>, Self::Error> {
        self.repositories
            .clone()
            .ok_or_else(|| io::Error::other("repository directory unreachable"))
    }
}

pub fn artifact_link(url: &str) -> Relation {
    Relation {
        rel: ARTIFACT_LINK.to_string(),
        url: url.to_string(),
        attributes: RelationAttributes::default(),
    }
}

pub fn work_item(id: WorkItemId, relations: Vec<Relation>) -> WorkItemRecord {
    WorkItemRecord { id, relations }
}

/// `vstfs:///Git/{token}/p1%2F{repo}%2F{git_ref}`
pub fn git_uri(token: &str, repo: &str, git_ref: &str) -> String {
    let tail = format!("p1/{repo}/{git_ref}");
    format!("vstfs:///Git/{token}/{}", tail.replace('/', "%2F"))
}
