use anchor_lang::error::Error;
use anchor_lang::prelude::{AccountInfo, Pubkey};
use anchor_lang::AccountSerialize;
use reputation_passport::error::ReputationError;
use reputation_passport::state::{Job, JobRecord, Registry, RegistryEntry, Worker, WorkerScore};
use reputation_passport::ID as PROGRAM_ID;

/// Serialized account as the runtime would hold it, owned by the program.
struct Stored {
    key: Pubkey,
    owner: Pubkey,
    lamports: u64,
    data: Vec<u8>,
}

impl Stored {
    fn new<T: AccountSerialize>(account: &T) -> Self {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        Self {
            key: Pubkey::new_unique(),
            owner: PROGRAM_ID,
            lamports: 1_000_000,
            data,
        }
    }

    /// An address nothing was ever written to.
    fn missing() -> Self {
        Self {
            key: Pubkey::new_unique(),
            owner: Pubkey::default(),
            lamports: 0,
            data: Vec::new(),
        }
    }

    fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            false,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}

fn enrolled(registry: &mut Registry, authority: Pubkey) -> Worker {
    let mut worker = Worker::default();
    registry.enroll(&mut worker, authority, 254, 1_758_326_400).unwrap();
    worker
}

fn submit(worker: &mut Worker, platform: &str, rating: u8, job_type: &str, timestamp: i64) -> Stored {
    let index = worker.record_job(platform, rating, job_type).unwrap();
    Stored::new(&Job::new(
        Pubkey::new_unique(),
        index,
        platform.to_string(),
        rating,
        job_type.to_string(),
        timestamp,
        253,
    ))
}

fn registered(stored: &mut Stored) -> Result<Worker, Error> {
    Worker::load_registered(&stored.info())
}

#[test]
fn registration_is_permanent() {
    let mut registry = Registry::default();
    let authority = Pubkey::new_unique();

    assert!(Worker::load(&Stored::missing().info()).unwrap().is_none());
    assert!(Worker::load(&Stored::new(&Worker::default()).info()).unwrap().is_none());

    let mut worker = enrolled(&mut registry, authority);
    assert!(Worker::load(&Stored::new(&worker).info()).unwrap().is_some());

    submit(&mut worker, "Uber", 5, "Driver", 1);
    let loaded = registered(&mut Stored::new(&worker)).unwrap();
    assert!(loaded.registered);
    assert_eq!(loaded.authority, authority);
}

#[test]
fn duplicate_registration_keeps_registry_size() {
    let mut registry = Registry::default();
    let authority = Pubkey::new_unique();
    let mut worker = enrolled(&mut registry, authority);

    let err = registry.enroll(&mut worker, authority, 254, 2).unwrap_err();
    assert_eq!(err, Error::from(ReputationError::AlreadyRegistered));
    assert_eq!(registry.worker_count, 1);
}

#[test]
fn fresh_worker_scores_zero() {
    let mut registry = Registry::default();
    let worker = enrolled(&mut registry, Pubkey::new_unique());

    let loaded = registered(&mut Stored::new(&worker)).unwrap();
    assert_eq!(loaded.score_view(), WorkerScore { score: 0, job_count: 0 });
}

#[test]
fn three_gig_platforms_average_to_four() {
    let mut registry = Registry::default();
    let mut worker = enrolled(&mut registry, Pubkey::new_unique());

    let mut first = submit(&mut worker, "Uber", 5, "Driver", 10);
    submit(&mut worker, "DoorDash", 4, "Delivery", 11);
    let mut last = submit(&mut worker, "TaskRabbit", 3, "Assembly", 12);

    let loaded = registered(&mut Stored::new(&worker)).unwrap();
    assert_eq!(loaded.score_view(), WorkerScore { score: 400, job_count: 3 });

    assert_eq!(
        Job::load_record(&loaded, 0, &first.info()).unwrap(),
        JobRecord {
            platform: "Uber".to_string(),
            rating: 5,
            timestamp: 10,
            job_type: "Driver".to_string(),
        }
    );
    let record = Job::load_record(&loaded, 2, &last.info()).unwrap();
    assert_eq!(record.platform, "TaskRabbit");
    assert_eq!(record.timestamp, 12);
}

#[test]
fn score_matches_mean_for_any_history() {
    let mut registry = Registry::default();
    let mut worker = enrolled(&mut registry, Pubkey::new_unique());

    let ratings = [5u8, 4, 5, 5, 1, 3, 2, 4];
    for (n, rating) in ratings.iter().enumerate() {
        submit(&mut worker, "Upwork", *rating, "Writing", n as i64);

        let seen = &ratings[..=n];
        let sum: u64 = seen.iter().map(|r| u64::from(*r)).sum();
        let count = seen.len() as u64;
        let loaded = registered(&mut Stored::new(&worker)).unwrap();
        assert_eq!(
            loaded.score_view(),
            WorkerScore { score: sum * 100 / count, job_count: count }
        );
    }
}

#[test]
fn unregistered_address_is_rejected_everywhere() {
    let mut never_created = Stored::missing();
    let mut blank = Stored::new(&Worker::default());

    for stored in [&mut never_created, &mut blank] {
        assert_eq!(
            registered(stored).unwrap_err(),
            Error::from(ReputationError::NotRegistered)
        );
    }

    let mut worker = Worker::default();
    let err = worker.record_job("Uber", 5, "Driver").unwrap_err();
    assert_eq!(err, Error::from(ReputationError::NotRegistered));
    assert_eq!(worker.job_count, 0);
}

#[test]
fn foreign_account_is_not_a_worker() {
    let mut registry = Registry::default();
    let worker = enrolled(&mut registry, Pubkey::new_unique());
    let mut stored = Stored::new(&worker);
    stored.owner = Pubkey::new_unique();

    assert!(Worker::load(&stored.info()).unwrap().is_none());
}

#[test]
fn job_lookup_past_end() {
    let mut registry = Registry::default();
    let mut worker = enrolled(&mut registry, Pubkey::new_unique());
    submit(&mut worker, "Uber", 5, "Driver", 1);
    submit(&mut worker, "DoorDash", 4, "Delivery", 2);

    let loaded = registered(&mut Stored::new(&worker)).unwrap();
    assert_eq!(loaded.job_count, 2);
    for index in [2, 5] {
        assert_eq!(
            Job::load_record(&loaded, index, &Stored::missing().info()).unwrap_err(),
            Error::from(ReputationError::IndexOutOfBounds)
        );
    }
}

#[test]
fn workers_listed_in_registration_order() {
    let mut registry = Registry::default();
    let (a1, a2) = (Pubkey::new_unique(), Pubkey::new_unique());

    let mut entries = Vec::new();
    for authority in [a1, a2] {
        let worker = enrolled(&mut registry, authority);
        entries.push(Stored::new(&RegistryEntry {
            worker: authority,
            ordinal: worker.ordinal,
            bump: 252,
        }));
    }

    assert_eq!(registry.worker_count, 2);
    assert_eq!(
        RegistryEntry::load_worker(&registry, 0, &entries[0].info()).unwrap(),
        a1
    );
    assert_eq!(
        RegistryEntry::load_worker(&registry, 1, &entries[1].info()).unwrap(),
        a2
    );
    assert_eq!(
        RegistryEntry::load_worker(&registry, 2, &Stored::missing().info()).unwrap_err(),
        Error::from(ReputationError::IndexOutOfBounds)
    );
}
