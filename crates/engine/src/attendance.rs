// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attendance reconciliation
//!
//! Marking is an upsert against two composite-unique keys: the session is
//! found-or-created by (allocation, date), and each entry is found-or-updated
//! by (session, student). Entries are always a partial list; a re-submission
//! never clears or defaults students it does not mention.
//!
//! Precondition checks run in a fixed order (resolve, authorize, detect
//! conflict, mutate) and the first failure wins; field-level collect-all
//! validation has already happened at the dispatch boundary.

use campus_adapters::store::{AllocationStore, RecordStore, SessionStore};
use campus_core::authz::{ensure_allocation_owner, OwnershipPolicy};
use campus_core::id::IdGen;
use campus_core::model::{AttendanceRecord, AttendanceSession, Caller, RecordId, SessionId};
use campus_core::outcome::{OpError, OpResult};
use campus_core::requests::{AttendanceEntry, MarkAttendance, UpdateAttendance};
use campus_core::visibility;

/// The attendance reconciliation engine.
pub struct AttendanceService<A, S, R, G> {
    allocations: A,
    sessions: S,
    records: R,
    policy: OwnershipPolicy,
    id_gen: G,
}

impl<A, S, R, G> AttendanceService<A, S, R, G>
where
    A: AllocationStore,
    S: SessionStore,
    R: RecordStore,
    G: IdGen,
{
    pub fn new(allocations: A, sessions: S, records: R, policy: OwnershipPolicy, id_gen: G) -> Self {
        Self {
            allocations,
            sessions,
            records,
            policy,
            id_gen,
        }
    }

    /// Take (or re-take) attendance for an allocation on a date.
    ///
    /// Returns the session id; whether the session pre-existed is not
    /// observable from the return value.
    pub async fn mark(&self, req: MarkAttendance) -> OpResult<SessionId> {
        let allocation = self
            .allocations
            .get(&req.allocation_id)
            .await?
            .filter(visibility::visible)
            .ok_or_else(|| OpError::not_found("allocation.not_found", "allocation not found"))?;

        let session = match self.sessions.find_by_date(&allocation.id, req.date).await? {
            Some(existing) => existing,
            None => {
                let session = AttendanceSession {
                    id: SessionId::new(self.id_gen.next()),
                    allocation_id: allocation.id.clone(),
                    date: req.date,
                };
                // A concurrent mark can win the insert between the find and
                // here; the store's constraint violation surfaces to the
                // loser as a conflict.
                self.sessions.add(session.clone()).await?;
                session
            }
        };

        self.apply_entries(&session.id, &req.entries).await?;

        tracing::info!(
            session = %session.id,
            allocation = %allocation.id,
            date = %req.date,
            entries = req.entries.len(),
            "attendance marked"
        );
        Ok(session.id)
    }

    /// Move a session to a new date and/or re-mark some of its records.
    pub async fn update(&self, caller: &Caller, req: UpdateAttendance) -> OpResult<()> {
        let session = self.sessions.get(&req.session_id).await?.ok_or_else(|| {
            OpError::not_found("attendance.session_not_found", "attendance session not found")
        })?;

        // A session without its allocation is a data-integrity hole, not a
        // user error; the caller still just sees not-found.
        let allocation = self
            .allocations
            .get(&session.allocation_id)
            .await?
            .ok_or_else(|| OpError::not_found("allocation.not_found", "allocation not found"))?;

        ensure_allocation_owner(&self.policy, caller, &allocation)?;

        if req.date != session.date {
            if self
                .sessions
                .find_by_date(&allocation.id, req.date)
                .await?
                .is_some()
            {
                return Err(OpError::conflict(
                    "attendance.session_exists",
                    "a session already exists for this date",
                ));
            }
            self.sessions.set_date(&session.id, req.date).await?;
        }

        self.apply_entries(&session.id, &req.entries).await?;

        tracing::info!(session = %session.id, date = %req.date, "attendance updated");
        Ok(())
    }

    /// Delete a session; its records go with it.
    pub async fn delete(&self, session_id: &SessionId) -> OpResult<()> {
        self.sessions.get(session_id).await?.ok_or_else(|| {
            OpError::not_found("attendance.session_not_found", "attendance session not found")
        })?;

        self.sessions.remove(session_id).await?;

        tracing::info!(session = %session_id, "attendance session deleted");
        Ok(())
    }

    /// Upsert the supplied entries into a session. Students not mentioned
    /// keep their existing records untouched.
    async fn apply_entries(
        &self,
        session_id: &SessionId,
        entries: &[AttendanceEntry],
    ) -> OpResult<()> {
        for entry in entries {
            match self.records.find(session_id, &entry.student_id).await? {
                Some(existing) => {
                    self.records.set_status(&existing.id, entry.status).await?;
                }
                None => {
                    self.records
                        .add(AttendanceRecord {
                            id: RecordId::new(self.id_gen.next()),
                            session_id: session_id.clone(),
                            student_id: entry.student_id.clone(),
                            status: entry.status,
                        })
                        .await?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "attendance_tests.rs"]
mod tests;
