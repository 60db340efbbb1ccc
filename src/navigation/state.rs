use std::fmt;

/// 导航所处的层级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationLevel {
    Departments,
    YearLevels,
    Sections,
    Subjects,
    Students,
}

impl fmt::Display for NavigationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavigationLevel::Departments => "departments",
            NavigationLevel::YearLevels => "year levels",
            NavigationLevel::Sections => "sections",
            NavigationLevel::Subjects => "subjects",
            NavigationLevel::Students => "students",
        };
        write!(f, "{name}")
    }
}

/// 选中班级后展示的列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView {
    Subjects,
    Students,
}

/// 用户在当前层级选中的子项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Department(i64),
    YearLevel(i64),
    Section { section_id: i64, view: SectionView },
}

impl Selection {
    /// 该选择只在哪一层有效
    pub fn expected_level(&self) -> NavigationLevel {
        match self {
            Selection::Department(_) => NavigationLevel::Departments,
            Selection::YearLevel(_) => NavigationLevel::YearLevels,
            Selection::Section { .. } => NavigationLevel::Sections,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// 选择与当前层级不符
    InvalidSelection {
        level: NavigationLevel,
        selection: Selection,
    },
    /// 选中的子项不在当前快照的可见行中
    UnknownChild {
        level: NavigationLevel,
        id: i64,
    },
    /// 已在最底层，无法继续下钻
    AtLeaf(NavigationLevel),
    /// 只有在班级内才能切换科目/学生视图
    NotInSection(NavigationLevel),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidSelection { level, selection } => write!(
                f,
                "cannot select {selection:?} while viewing {level}, expected a selection for {}",
                selection.expected_level()
            ),
            NavigationError::UnknownChild { level, id } => {
                write!(f, "{id} is not listed under the current {level}")
            }
            NavigationError::AtLeaf(level) => write!(f, "{level} is the deepest level"),
            NavigationError::NotInSection(level) => {
                write!(f, "no section is selected while viewing {level}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// 钻取状态
///
/// 每个状态携带到达它所需的全部父级 id，因此不存在“选了班级却没选年级”的组合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    AtDepartments,
    AtYearLevels {
        department_id: i64,
    },
    AtSections {
        department_id: i64,
        year_level_id: i64,
    },
    AtSubjects {
        department_id: i64,
        year_level_id: i64,
        section_id: i64,
    },
    AtStudents {
        department_id: i64,
        year_level_id: i64,
        section_id: i64,
    },
}

impl NavigationState {
    pub fn level(&self) -> NavigationLevel {
        match self {
            NavigationState::AtDepartments => NavigationLevel::Departments,
            NavigationState::AtYearLevels { .. } => NavigationLevel::YearLevels,
            NavigationState::AtSections { .. } => NavigationLevel::Sections,
            NavigationState::AtSubjects { .. } => NavigationLevel::Subjects,
            NavigationState::AtStudents { .. } => NavigationLevel::Students,
        }
    }

    pub fn department_id(&self) -> Option<i64> {
        match *self {
            NavigationState::AtDepartments => None,
            NavigationState::AtYearLevels { department_id }
            | NavigationState::AtSections { department_id, .. }
            | NavigationState::AtSubjects { department_id, .. }
            | NavigationState::AtStudents { department_id, .. } => Some(department_id),
        }
    }

    pub fn year_level_id(&self) -> Option<i64> {
        match *self {
            NavigationState::AtDepartments | NavigationState::AtYearLevels { .. } => None,
            NavigationState::AtSections { year_level_id, .. }
            | NavigationState::AtSubjects { year_level_id, .. }
            | NavigationState::AtStudents { year_level_id, .. } => Some(year_level_id),
        }
    }

    pub fn section_id(&self) -> Option<i64> {
        match *self {
            NavigationState::AtSubjects { section_id, .. }
            | NavigationState::AtStudents { section_id, .. } => Some(section_id),
            _ => None,
        }
    }

    /// 下钻一层
    ///
    /// 选择与当前层级不符时返回错误，状态保持不变。
    pub fn descend(&mut self, selection: Selection) -> Result<(), NavigationError> {
        let next = match (*self, selection) {
            (NavigationState::AtDepartments, Selection::Department(department_id)) => {
                NavigationState::AtYearLevels { department_id }
            }
            (NavigationState::AtYearLevels { department_id }, Selection::YearLevel(year_level_id)) => {
                NavigationState::AtSections {
                    department_id,
                    year_level_id,
                }
            }
            (
                NavigationState::AtSections {
                    department_id,
                    year_level_id,
                },
                Selection::Section { section_id, view },
            ) => match view {
                SectionView::Subjects => NavigationState::AtSubjects {
                    department_id,
                    year_level_id,
                    section_id,
                },
                SectionView::Students => NavigationState::AtStudents {
                    department_id,
                    year_level_id,
                    section_id,
                },
            },
            (NavigationState::AtSubjects { .. } | NavigationState::AtStudents { .. }, _) => {
                return Err(NavigationError::AtLeaf(self.level()));
            }
            (state, selection) => {
                return Err(NavigationError::InvalidSelection {
                    level: state.level(),
                    selection,
                });
            }
        };

        *self = next;
        Ok(())
    }

    /// 返回上一层，只清除一级选择；在根层级时不做任何事
    pub fn ascend(&mut self) {
        *self = match *self {
            NavigationState::AtDepartments | NavigationState::AtYearLevels { .. } => {
                NavigationState::AtDepartments
            }
            NavigationState::AtSections { department_id, .. } => {
                NavigationState::AtYearLevels { department_id }
            }
            NavigationState::AtSubjects {
                department_id,
                year_level_id,
                ..
            }
            | NavigationState::AtStudents {
                department_id,
                year_level_id,
                ..
            } => NavigationState::AtSections {
                department_id,
                year_level_id,
            },
        };
    }

    /// 在同一班级的科目与学生列表之间切换
    pub fn switch_section_view(&mut self) -> Result<(), NavigationError> {
        *self = match *self {
            NavigationState::AtSubjects {
                department_id,
                year_level_id,
                section_id,
            } => NavigationState::AtStudents {
                department_id,
                year_level_id,
                section_id,
            },
            NavigationState::AtStudents {
                department_id,
                year_level_id,
                section_id,
            } => NavigationState::AtSubjects {
                department_id,
                year_level_id,
                section_id,
            },
            other => return Err(NavigationError::NotInSection(other.level())),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_subjects() -> NavigationState {
        NavigationState::AtSubjects {
            department_id: 1,
            year_level_id: 2,
            section_id: 3,
        }
    }

    #[test]
    fn test_descend_moves_one_level() {
        let mut state = NavigationState::default();
        state.descend(Selection::Department(1)).unwrap();
        assert_eq!(state, NavigationState::AtYearLevels { department_id: 1 });

        state.descend(Selection::YearLevel(2)).unwrap();
        assert_eq!(
            state,
            NavigationState::AtSections {
                department_id: 1,
                year_level_id: 2
            }
        );

        state
            .descend(Selection::Section {
                section_id: 3,
                view: SectionView::Subjects,
            })
            .unwrap();
        assert_eq!(state, at_subjects());
        assert_eq!(state.section_id(), Some(3));
    }

    #[test]
    fn test_invalid_selection_keeps_state() {
        let mut state = NavigationState::AtYearLevels { department_id: 1 };
        let err = state.descend(Selection::Department(9)).unwrap_err();

        assert_eq!(
            err,
            NavigationError::InvalidSelection {
                level: NavigationLevel::YearLevels,
                selection: Selection::Department(9),
            }
        );
        assert_eq!(state, NavigationState::AtYearLevels { department_id: 1 });
    }

    #[test]
    fn test_cannot_descend_past_leaf() {
        let mut state = at_subjects();
        assert_eq!(
            state.descend(Selection::YearLevel(2)),
            Err(NavigationError::AtLeaf(NavigationLevel::Subjects))
        );
        assert_eq!(state, at_subjects());
    }

    #[test]
    fn test_ascend_clears_exactly_one_level() {
        let mut state = NavigationState::AtStudents {
            department_id: 1,
            year_level_id: 2,
            section_id: 3,
        };

        state.ascend();
        assert_eq!(
            state,
            NavigationState::AtSections {
                department_id: 1,
                year_level_id: 2
            }
        );
        assert_eq!(state.section_id(), None);

        state.ascend();
        assert_eq!(state, NavigationState::AtYearLevels { department_id: 1 });
        assert_eq!(state.year_level_id(), None);

        state.ascend();
        assert_eq!(state, NavigationState::AtDepartments);

        // 根层级
        state.ascend();
        assert_eq!(state, NavigationState::AtDepartments);
        assert_eq!(state.department_id(), None);
    }

    #[test]
    fn test_switch_section_view() {
        let mut state = at_subjects();
        state.switch_section_view().unwrap();
        assert_eq!(state.level(), NavigationLevel::Students);
        assert_eq!(state.section_id(), Some(3));

        state.switch_section_view().unwrap();
        assert_eq!(state, at_subjects());

        let mut root = NavigationState::AtDepartments;
        assert_eq!(
            root.switch_section_view(),
            Err(NavigationError::NotInSection(NavigationLevel::Departments))
        );
    }
}
