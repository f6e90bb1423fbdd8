// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrappers for consistent observability

use crate::store::{AllocationStore, RecordStore, SessionStore, StoreError};
use async_trait::async_trait;
use campus_core::model::{
    Allocation, AllocationId, AttendanceRecord, AttendanceSession, AttendanceStatus, ClassId,
    RecordId, SessionId, StudentId, SubjectId, UserId,
};
use chrono::NaiveDate;
use tracing::Instrument;

/// Wrapper that adds tracing to any AllocationStore
#[derive(Clone)]
pub struct TracedAllocationStore<A> {
    inner: A,
}

impl<A> TracedAllocationStore<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<A: AllocationStore> AllocationStore for TracedAllocationStore<A> {
    async fn get(&self, id: &AllocationId) -> Result<Option<Allocation>, StoreError> {
        let result = self.inner.get(id).await;
        tracing::trace!(allocation = %id, found = ?result.as_ref().map(|r| r.is_some()).ok(), "allocation.get");
        result
    }

    async fn find_by_binding(
        &self,
        teacher_id: &UserId,
        class_id: &ClassId,
        subject_id: &SubjectId,
    ) -> Result<Option<Allocation>, StoreError> {
        let result = self
            .inner
            .find_by_binding(teacher_id, class_id, subject_id)
            .await;
        tracing::trace!(teacher = %teacher_id, class = %class_id, subject = %subject_id, "allocation.find_by_binding");
        result
    }

    async fn add(&self, allocation: Allocation) -> Result<(), StoreError> {
        let span = tracing::info_span!("allocation.add", allocation = %allocation.id);
        let result = self.inner.add(allocation).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!("allocation stored"),
            Err(e) => tracing::warn!(error = %e, "allocation add failed"),
        });
        result
    }

    async fn archive(&self, id: &AllocationId) -> Result<(), StoreError> {
        let span = tracing::info_span!("allocation.archive", allocation = %id);
        let result = self.inner.archive(id).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!("allocation archived"),
            Err(e) => tracing::warn!(error = %e, "archive failed"),
        });
        result
    }

    async fn list(&self) -> Result<Vec<Allocation>, StoreError> {
        let result = self.inner.list().await;
        tracing::trace!(count = ?result.as_ref().map(Vec::len).ok(), "allocation.list");
        result
    }
}

/// Wrapper that adds tracing to any SessionStore
#[derive(Clone)]
pub struct TracedSessionStore<S> {
    inner: S,
}

impl<S> TracedSessionStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SessionStore> SessionStore for TracedSessionStore<S> {
    async fn get(&self, id: &SessionId) -> Result<Option<AttendanceSession>, StoreError> {
        let result = self.inner.get(id).await;
        tracing::trace!(session = %id, found = ?result.as_ref().map(|r| r.is_some()).ok(), "session.get");
        result
    }

    async fn find_by_date(
        &self,
        allocation_id: &AllocationId,
        date: NaiveDate,
    ) -> Result<Option<AttendanceSession>, StoreError> {
        let result = self.inner.find_by_date(allocation_id, date).await;
        tracing::trace!(allocation = %allocation_id, %date, "session.find_by_date");
        result
    }

    async fn add(&self, session: AttendanceSession) -> Result<(), StoreError> {
        let span = tracing::info_span!("session.add", session = %session.id, allocation = %session.allocation_id);
        let result = self.inner.add(session).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!("session stored"),
            // The find-or-create race loser lands here; the engine turns it
            // into a conflict.
            Err(e) => tracing::warn!(error = %e, "session add failed"),
        });
        result
    }

    async fn set_date(&self, id: &SessionId, date: NaiveDate) -> Result<(), StoreError> {
        let span = tracing::info_span!("session.set_date", session = %id, %date);
        let result = self.inner.set_date(id, date).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!("session date moved"),
            Err(e) => tracing::warn!(error = %e, "set_date failed"),
        });
        result
    }

    async fn remove(&self, id: &SessionId) -> Result<(), StoreError> {
        let span = tracing::info_span!("session.remove", session = %id);
        let result = self.inner.remove(id).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!("session removed"),
            Err(e) => tracing::warn!(error = %e, "remove failed"),
        });
        result
    }
}

/// Wrapper that adds tracing to any RecordStore
#[derive(Clone)]
pub struct TracedRecordStore<R> {
    inner: R,
}

impl<R> TracedRecordStore<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: RecordStore> RecordStore for TracedRecordStore<R> {
    async fn find(
        &self,
        session_id: &SessionId,
        student_id: &StudentId,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        let result = self.inner.find(session_id, student_id).await;
        tracing::trace!(session = %session_id, student = %student_id, "record.find");
        result
    }

    async fn list_for_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        let result = self.inner.list_for_session(session_id).await;
        tracing::trace!(session = %session_id, count = ?result.as_ref().map(Vec::len).ok(), "record.list");
        result
    }

    async fn add(&self, record: AttendanceRecord) -> Result<(), StoreError> {
        let span = tracing::info_span!("record.add", session = %record.session_id, student = %record.student_id);
        let result = self.inner.add(record).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::debug!("record stored"),
            Err(e) => tracing::warn!(error = %e, "record add failed"),
        });
        result
    }

    async fn set_status(&self, id: &RecordId, status: AttendanceStatus) -> Result<(), StoreError> {
        let span = tracing::info_span!("record.set_status", record = %id);
        let result = self.inner.set_status(id, status).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::debug!(?status, "record overwritten"),
            Err(e) => tracing::warn!(error = %e, "set_status failed"),
        });
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
