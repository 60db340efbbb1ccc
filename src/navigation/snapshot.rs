use std::collections::HashMap;

use super::state::{NavigationError, NavigationLevel, NavigationState, Selection};
use crate::models::{
    departments::entities::Department, sections::entities::Section, students::entities::Student,
    subjects::responses::SubjectDetail, year_levels::entities::YearLevel,
};

/// 一次完整拉取的结果
#[derive(Debug, Clone, Default)]
pub struct SnapshotData {
    pub departments: Vec<Department>,
    pub year_levels: Vec<YearLevel>,
    pub sections: Vec<Section>,
    pub subjects: Vec<SubjectDetail>,
    pub students: Vec<Student>,
}

/// 当前状态下可见的行
#[derive(Debug, Clone, PartialEq)]
pub enum VisibleRows<'a> {
    Departments(Vec<&'a Department>),
    YearLevels(Vec<&'a YearLevel>),
    Sections(Vec<&'a Section>),
    Subjects(Vec<&'a SubjectDetail>),
    Students(Vec<&'a Student>),
}

impl VisibleRows<'_> {
    pub fn len(&self) -> usize {
        match self {
            VisibleRows::Departments(rows) => rows.len(),
            VisibleRows::YearLevels(rows) => rows.len(),
            VisibleRows::Sections(rows) => rows.len(),
            VisibleRows::Subjects(rows) => rows.len(),
            VisibleRows::Students(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// 父级 id → 子行下标
#[derive(Debug, Default)]
struct ChildIndex {
    year_levels_by_department: HashMap<i64, Vec<usize>>,
    sections_by_year_level: HashMap<(i64, i64), Vec<usize>>,
    subjects_by_section: HashMap<i64, Vec<usize>>,
    // 未指定班级的科目，对该年级所有班级可见
    unsectioned_subjects_by_year_level: HashMap<(i64, i64), Vec<usize>>,
    students_by_section: HashMap<i64, Vec<usize>>,
}

impl ChildIndex {
    fn build(data: &SnapshotData) -> Self {
        let mut index = ChildIndex::default();

        for (i, year_level) in data.year_levels.iter().enumerate() {
            index
                .year_levels_by_department
                .entry(year_level.department_id)
                .or_default()
                .push(i);
        }
        for rows in index.year_levels_by_department.values_mut() {
            rows.sort_by_key(|&i| (data.year_levels[i].level, data.year_levels[i].id));
        }

        for (i, section) in data.sections.iter().enumerate() {
            index
                .sections_by_year_level
                .entry((section.department_id, section.year_level_id))
                .or_default()
                .push(i);
        }

        for (i, detail) in data.subjects.iter().enumerate() {
            let subject = &detail.subject;
            match subject.section_id {
                Some(section_id) => index.subjects_by_section.entry(section_id).or_default(),
                None => index
                    .unsectioned_subjects_by_year_level
                    .entry((subject.department_id, subject.year_level_id))
                    .or_default(),
            }
            .push(i);
        }

        for (i, student) in data.students.iter().enumerate() {
            if let Some(section_id) = student.section_id {
                index
                    .students_by_section
                    .entry(section_id)
                    .or_default()
                    .push(i);
            }
        }

        index
    }
}

/// 最近一次从 API 拉取的数据
///
/// 每次写操作后调用 `mark_dirty`，重新拉取后用 `replace` 整体替换。
/// 快照只是派生视图，服务端才是数据来源。
#[derive(Debug)]
pub struct Snapshot {
    data: SnapshotData,
    index: ChildIndex,
    dirty: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    /// 空快照，需要拉取
    pub fn new() -> Self {
        Self {
            data: SnapshotData::default(),
            index: ChildIndex::default(),
            dirty: true,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// 安装新拉取的数据并清除脏标记
    pub fn replace(&mut self, data: SnapshotData) {
        self.index = ChildIndex::build(&data);
        self.data = data;
        self.dirty = false;
    }

    pub fn data(&self) -> &SnapshotData {
        &self.data
    }

    fn pick<'a, T>(rows: &'a [T], indices: Option<&Vec<usize>>) -> Vec<&'a T> {
        indices
            .map(|indices| indices.iter().map(|&i| &rows[i]).collect())
            .unwrap_or_default()
    }

    /// 由快照推导出给定状态下的可见行
    pub fn visible(&self, state: &NavigationState) -> VisibleRows<'_> {
        match *state {
            NavigationState::AtDepartments => {
                VisibleRows::Departments(self.data.departments.iter().collect())
            }
            NavigationState::AtYearLevels { department_id } => VisibleRows::YearLevels(
                Self::pick(
                    &self.data.year_levels,
                    self.index.year_levels_by_department.get(&department_id),
                ),
            ),
            NavigationState::AtSections {
                department_id,
                year_level_id,
            } => VisibleRows::Sections(Self::pick(
                &self.data.sections,
                self.index
                    .sections_by_year_level
                    .get(&(department_id, year_level_id)),
            )),
            NavigationState::AtSubjects {
                department_id,
                year_level_id,
                section_id,
            } => {
                let mut indices: Vec<usize> = self
                    .index
                    .subjects_by_section
                    .get(&section_id)
                    .into_iter()
                    .flatten()
                    .chain(
                        self.index
                            .unsectioned_subjects_by_year_level
                            .get(&(department_id, year_level_id))
                            .into_iter()
                            .flatten(),
                    )
                    .copied()
                    .collect();
                indices.sort_unstable();

                VisibleRows::Subjects(indices.iter().map(|&i| &self.data.subjects[i]).collect())
            }
            NavigationState::AtStudents { section_id, .. } => VisibleRows::Students(Self::pick(
                &self.data.students,
                self.index.students_by_section.get(&section_id),
            )),
        }
    }

    /// 只允许选中当前可见的子项，然后下钻
    pub fn descend(
        &self,
        state: &mut NavigationState,
        selection: Selection,
    ) -> Result<(), NavigationError> {
        let level = state.level();
        let (visible, id) = match (self.visible(state), selection) {
            (VisibleRows::Departments(rows), Selection::Department(id)) => {
                (rows.iter().any(|d| d.id == id), id)
            }
            (VisibleRows::YearLevels(rows), Selection::YearLevel(id)) => {
                (rows.iter().any(|y| y.id == id), id)
            }
            (VisibleRows::Sections(rows), Selection::Section { section_id, .. }) => {
                (rows.iter().any(|s| s.id == section_id), section_id)
            }
            // 层级不符的情况交给状态机报告
            _ => return state.descend(selection),
        };

        if !visible {
            return Err(NavigationError::UnknownChild { level, id });
        }
        state.descend(selection)
    }

    /// 所在层级的父行已不在新快照中时，退回到仍然存在的最深层级
    pub fn reconcile(&self, state: &mut NavigationState) {
        loop {
            let still_valid = match *state {
                NavigationState::AtDepartments => true,
                NavigationState::AtYearLevels { department_id } => {
                    self.data.departments.iter().any(|d| d.id == department_id)
                }
                NavigationState::AtSections {
                    department_id,
                    year_level_id,
                } => self
                    .data
                    .year_levels
                    .iter()
                    .any(|y| y.id == year_level_id && y.department_id == department_id),
                NavigationState::AtSubjects {
                    department_id,
                    year_level_id,
                    section_id,
                }
                | NavigationState::AtStudents {
                    department_id,
                    year_level_id,
                    section_id,
                } => self.data.sections.iter().any(|s| {
                    s.id == section_id
                        && s.department_id == department_id
                        && s.year_level_id == year_level_id
                }),
            };

            if still_valid || state.level() == NavigationLevel::Departments {
                break;
            }
            state.ascend();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subjects::entities::Subject;
    use crate::navigation::SectionView;

    fn now() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc::now()
    }

    fn department(id: i64, code: &str) -> Department {
        Department {
            id,
            name: format!("Department {code}"),
            code: code.into(),
            created_at: now(),
            updated_at: now(),
        }
    }

    fn year_level(id: i64, department_id: i64, level: i32) -> YearLevel {
        YearLevel {
            id,
            department_id,
            name: format!("Year {level}"),
            level,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn section(id: i64, department_id: i64, year_level_id: i64) -> Section {
        Section {
            id,
            name: format!("Section {id}"),
            department_id,
            year_level_id,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn subject(id: i64, year_level_id: i64, section_id: Option<i64>) -> SubjectDetail {
        SubjectDetail {
            subject: Subject {
                id,
                code: format!("IT{id}"),
                title: format!("Subject {id}"),
                units: None,
                semester: None,
                curriculum_year: None,
                department_id: 1,
                year_level_id,
                teacher_id: None,
                section_id,
                day: None,
                time: None,
                room: None,
                created_at: now(),
                updated_at: now(),
            },
            teacher_name: None,
            year_level_name: None,
        }
    }

    fn student(id: i64, section_id: Option<i64>) -> Student {
        Student {
            id,
            user_id: None,
            first_name: "Ana".into(),
            last_name: format!("Cruz {id}"),
            email: format!("student{id}@school.edu"),
            department_id: 1,
            year_level_id: 10,
            section_id,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn sample() -> SnapshotData {
        SnapshotData {
            departments: vec![department(1, "IT"), department(2, "CS")],
            year_levels: vec![
                year_level(11, 1, 2),
                year_level(10, 1, 1),
                year_level(20, 2, 1),
            ],
            sections: vec![section(100, 1, 10), section(101, 1, 10), section(200, 2, 20)],
            subjects: vec![
                subject(1, 10, Some(100)),
                subject(2, 10, None),
                subject(3, 10, Some(101)),
                subject(4, 11, None),
            ],
            students: vec![student(1, Some(100)), student(2, Some(101)), student(3, None)],
        }
    }

    fn ids<T>(rows: &[&T], id: impl Fn(&T) -> i64) -> Vec<i64> {
        rows.iter().map(|row| id(*row)).collect()
    }

    #[test]
    fn test_dirty_flag_lifecycle() {
        let mut snapshot = Snapshot::new();
        assert!(snapshot.is_dirty());

        snapshot.replace(sample());
        assert!(!snapshot.is_dirty());

        snapshot.mark_dirty();
        assert!(snapshot.is_dirty());
        // 标记不会丢弃旧数据
        assert_eq!(snapshot.data().departments.len(), 2);
    }

    #[test]
    fn test_year_levels_are_ordered_by_level() {
        let mut snapshot = Snapshot::new();
        snapshot.replace(sample());

        match snapshot.visible(&NavigationState::AtYearLevels { department_id: 1 }) {
            VisibleRows::YearLevels(rows) => assert_eq!(ids(&rows, |y| y.id), vec![10, 11]),
            other => panic!("unexpected rows: {other:?}"),
        }

        let empty = snapshot.visible(&NavigationState::AtYearLevels { department_id: 99 });
        assert!(empty.is_empty());
    }

    #[test]
    fn test_section_views_filter_by_section() {
        let mut snapshot = Snapshot::new();
        snapshot.replace(sample());

        let subjects = snapshot.visible(&NavigationState::AtSubjects {
            department_id: 1,
            year_level_id: 10,
            section_id: 100,
        });
        match subjects {
            VisibleRows::Subjects(rows) => {
                assert_eq!(ids(&rows, |s| s.subject.id), vec![1, 2]);
            }
            other => panic!("unexpected rows: {other:?}"),
        }

        let students = snapshot.visible(&NavigationState::AtStudents {
            department_id: 1,
            year_level_id: 10,
            section_id: 100,
        });
        match students {
            VisibleRows::Students(rows) => assert_eq!(ids(&rows, |s| s.id), vec![1]),
            other => panic!("unexpected rows: {other:?}"),
        }
    }

    #[test]
    fn test_descend_rejects_rows_outside_parent() {
        let mut snapshot = Snapshot::new();
        snapshot.replace(sample());
        let mut state = NavigationState::AtYearLevels { department_id: 1 };

        // 年级 20 属于院系 2
        assert_eq!(
            snapshot.descend(&mut state, Selection::YearLevel(20)),
            Err(NavigationError::UnknownChild {
                level: NavigationLevel::YearLevels,
                id: 20
            })
        );
        assert_eq!(state, NavigationState::AtYearLevels { department_id: 1 });

        snapshot
            .descend(&mut state, Selection::YearLevel(10))
            .unwrap();
        snapshot
            .descend(
                &mut state,
                Selection::Section {
                    section_id: 101,
                    view: SectionView::Students,
                },
            )
            .unwrap();
        assert_eq!(state.section_id(), Some(101));
    }

    #[test]
    fn test_reconcile_after_section_removed() {
        let mut snapshot = Snapshot::new();
        snapshot.replace(sample());
        let mut state = NavigationState::AtSubjects {
            department_id: 1,
            year_level_id: 10,
            section_id: 100,
        };

        let mut data = sample();
        data.sections.retain(|s| s.id != 100);
        snapshot.mark_dirty();
        snapshot.replace(data);
        snapshot.reconcile(&mut state);

        assert_eq!(
            state,
            NavigationState::AtSections {
                department_id: 1,
                year_level_id: 10
            }
        );
    }
}
