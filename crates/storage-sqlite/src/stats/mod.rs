mod repository;

pub use repository::StatsRepository;
