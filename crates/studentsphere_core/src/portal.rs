//! Portal facade: one store, one id source, every entity service.
//!
//! # Responsibility
//! - Own the `LocalStore` and `IdGenerator` shared by all services.
//! - Seed every collection on first launch.
//!
//! # Invariants
//! - Services borrow the portal; they never own storage.
//! - `ensure_initialized` leaves existing collections untouched.

use crate::config::PortalConfig;
use crate::model::achievement::Achievement;
use crate::model::assignment::Assignment;
use crate::model::attendance::AttendanceRecord;
use crate::model::contact::ContactSubmission;
use crate::model::faculty::FacultyMember;
use crate::model::id::IdGenerator;
use crate::model::lab::LabSession;
use crate::model::mark::Mark;
use crate::model::note::Note;
use crate::model::student::Student;
use crate::model::Record;
use crate::seed;
use crate::service::achievement_service::AchievementService;
use crate::service::assignment_service::AssignmentService;
use crate::service::attendance_service::AttendanceService;
use crate::service::contact_service::ContactService;
use crate::service::faculty_service::FacultyService;
use crate::service::lab_service::LabService;
use crate::service::mark_service::MarkService;
use crate::service::note_service::NoteService;
use crate::service::profile_service::ProfileService;
use crate::service::student_service::StudentService;
use crate::store::{
    keys, KeyValueStore, LatencyProfile, LocalStore, MemoryStore, SqliteStore, StoreResult,
};
use log::info;

pub struct Portal<S: KeyValueStore> {
    store: LocalStore<S>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> Portal<S> {
    pub fn new(backend: S, latency: LatencyProfile) -> Self {
        Self {
            store: LocalStore::new(backend).with_latency(latency),
            ids: IdGenerator::new(),
        }
    }

    pub fn store(&self) -> &LocalStore<S> {
        &self.store
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Writes default data for every collection that is still absent.
    ///
    /// Returns how many collections were seeded by this call.
    pub fn ensure_initialized(&self) -> StoreResult<usize> {
        let seeded = [
            self.seed_collection::<Student>()?,
            self.seed_collection::<Note>()?,
            self.seed_collection::<Assignment>()?,
            self.seed_collection::<Mark>()?,
            self.seed_collection::<FacultyMember>()?,
            self.seed_collection::<LabSession>()?,
            self.seed_collection::<Achievement>()?,
            self.seed_collection::<ContactSubmission>()?,
            self.seed_collection::<AttendanceRecord>()?,
            self.store.ensure_initialized(keys::PROFILE, seed::profile)?,
        ]
        .into_iter()
        .filter(|wrote| *wrote)
        .count();
        info!("event=portal_init module=portal status=ok seeded={seeded}");
        Ok(seeded)
    }

    fn seed_collection<R: Record>(&self) -> StoreResult<bool> {
        self.store.ensure_initialized(R::COLLECTION_KEY, R::seed)
    }

    pub fn students(&self) -> StudentService<'_, S> {
        StudentService::new(&self.store, &self.ids)
    }

    pub fn notes(&self) -> NoteService<'_, S> {
        NoteService::new(&self.store, &self.ids)
    }

    pub fn assignments(&self) -> AssignmentService<'_, S> {
        AssignmentService::new(&self.store)
    }

    pub fn marks(&self) -> MarkService<'_, S> {
        MarkService::new(&self.store)
    }

    pub fn faculty(&self) -> FacultyService<'_, S> {
        FacultyService::new(&self.store)
    }

    pub fn labs(&self) -> LabService<'_, S> {
        LabService::new(&self.store, &self.ids)
    }

    pub fn achievements(&self) -> AchievementService<'_, S> {
        AchievementService::new(&self.store)
    }

    pub fn attendance(&self) -> AttendanceService<'_, S> {
        AttendanceService::new(&self.store)
    }

    pub fn contacts(&self) -> ContactService<'_, S> {
        ContactService::new(&self.store, &self.ids)
    }

    pub fn profile(&self) -> ProfileService<'_, S> {
        ProfileService::new(&self.store)
    }
}

impl Portal<SqliteStore> {
    /// Opens the configured SQLite store, or an in-memory database when no
    /// path is set.
    pub fn open(config: &PortalConfig) -> StoreResult<Self> {
        let backend = match &config.db_path {
            Some(path) => SqliteStore::open(path)?,
            None => SqliteStore::open_in_memory()?,
        };
        Ok(Self::new(backend, config.latency_profile()))
    }
}

impl Portal<MemoryStore> {
    /// Map-backed portal with no simulated latency.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), LatencyProfile::disabled())
    }
}
