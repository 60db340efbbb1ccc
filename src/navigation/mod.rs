//! 层级导航
//!
//! 客户端从 院系 → 年级 → 班级 → 科目/学生 逐级钻取的状态机，以及最近一次
//! 从 API 拉取的数据快照。可见行总是由快照按父级 id 相等过滤得到，不单独保存。

pub mod snapshot;
pub mod state;

pub use snapshot::{Snapshot, SnapshotData, VisibleRows};
pub use state::{NavigationError, NavigationLevel, NavigationState, SectionView, Selection};
