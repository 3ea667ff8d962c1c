pub mod buckets;
pub mod index;
pub mod neighbors;

pub use buckets::{bucket_index, generate_buckets, BucketError, BucketSpec};
pub use index::MentionGraph;
pub use neighbors::{rank_neighbors, Neighbor};
