//! Shared setup for the behavioral specs.

use campus_adapters::store::{
    AllocationStore, MemoryAllocations, MemoryAssignments, MemoryRecords, MemorySessions,
    MemoryStore, MemorySubmissions,
};
use campus_adapters::FakeIdentityAdapter;
use campus_core::authz::OwnershipPolicy;
use campus_core::id::SequentialIdGen;
use campus_core::model::{Allocation, AllocationId, Caller, ClassId, Role, SubjectId, UserId};
use campus_engine::{Deps, Dispatcher};

pub type SpecDispatcher = Dispatcher<
    MemoryAllocations,
    MemorySessions,
    MemoryRecords,
    MemoryAssignments,
    MemorySubmissions,
    FakeIdentityAdapter,
    SequentialIdGen,
>;

pub struct World {
    pub store: MemoryStore,
    pub identity: FakeIdentityAdapter,
    pub dispatcher: SpecDispatcher,
}

/// A fresh backend over an empty in-memory store.
pub fn world() -> World {
    world_with_policy(OwnershipPolicy::default())
}

pub fn world_with_policy(policy: OwnershipPolicy) -> World {
    let store = MemoryStore::new();
    let identity = FakeIdentityAdapter::new();
    let dispatcher = Dispatcher::new(
        Deps {
            allocations: store.allocations(),
            sessions: store.sessions(),
            records: store.records(),
            assignments: store.assignments(),
            submissions: store.submissions(),
            identity: identity.clone(),
        },
        policy,
        SequentialIdGen::new("id"),
    );
    World {
        store,
        identity,
        dispatcher,
    }
}

impl World {
    /// Seed an allocation for a teacher, bypassing the admin surface.
    pub async fn seed_allocation(&self, id: &str, teacher: &str) -> AllocationId {
        let allocation_id = AllocationId::new(id);
        self.store
            .allocations()
            .add(Allocation::new(
                allocation_id.clone(),
                UserId::new(teacher),
                ClassId::new("7a"),
                SubjectId::new("math"),
            ))
            .await
            .unwrap();
        allocation_id
    }

    pub fn sign_in(&self, user: &str, role: Role) {
        self.identity
            .set_caller(Some(Caller::new(UserId::new(user), role)));
    }

    pub fn sign_out(&self) {
        self.identity.set_caller(None);
    }
}
