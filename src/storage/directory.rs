//! A file backed directory of student records
//!
//! The [`Directory`] holds every record in memory, in insertion order, and
//! rewrites the whole backing file after each successful [`Directory::add`].
//! The rewrite is not safe against concurrent writers.

use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{
    domain::{sample_students, Query, Student, ValidationError},
    storage::flat_file,
};

/// An in-memory student directory backed by a flat file.
#[derive(Debug)]
pub struct Directory {
    /// The file the records were loaded from and are saved to.
    path: PathBuf,
    students: Vec<Student>,
}

impl Directory {
    /// Loads the directory file at `path`.
    ///
    /// If nothing could be loaded (the file is missing, empty, or holds only
    /// invalid records) the directory is seeded with the sample records. The
    /// seed is not written back until the first successful add.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let mut students = flat_file::load(&path);
        if students.is_empty() {
            tracing::debug!("No records loaded from {}, seeding samples", path.display());
            students = sample_students();
        }
        Self { path, students }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns `true` if the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The first record with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: i32) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Every record matching the query, in directory order.
    #[must_use]
    pub fn search(&self, query: &Query) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|student| query.matches(student))
            .collect()
    }

    /// Validate and append a record, then rewrite the backing file.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    ///
    /// - the record is out of bounds (the directory is unchanged)
    /// - a record with the same id already exists (the directory is unchanged)
    /// - the backing file cannot be written. The record stays appended in
    ///   memory, so memory and disk disagree until the next successful save.
    pub fn add(&mut self, student: Student) -> Result<(), AddError> {
        student.validate()?;

        if self.find_by_id(student.id).is_some() {
            return Err(AddError::DuplicateId(student.id));
        }

        let id = student.id;
        self.students.push(student);
        flat_file::save(&self.path, &self.students)?;

        tracing::info!("Added student {id}, saved {} records", self.students.len());

        Ok(())
    }
}

/// The reason [`Directory::add`] failed.
#[derive(Debug, thiserror::Error)]
pub enum AddError {
    /// The record failed validation.
    #[error("invalid student record: {0}")]
    Invalid(#[from] ValidationError),
    /// A record with this id already exists.
    #[error("student with ID {0} already exists")]
    DuplicateId(i32),
    /// The backing file could not be written.
    #[error("cannot write database file: {0}")]
    Save(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn setup_temp_directory() -> (TempDir, Directory) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("students_database.txt");
        (tmp, Directory::open(path))
    }

    fn ids(students: &[&Student]) -> Vec<i32> {
        students.iter().map(|s| s.id).collect()
    }

    #[test]
    fn missing_file_seeds_samples() {
        let (_tmp, dir) = setup_temp_directory();
        let ids: Vec<_> = dir.students().iter().map(|s| s.id).collect();
        assert_eq!(ids, [101, 102, 103, 104, 105]);
        assert!(!dir.path().exists());
    }

    #[test]
    fn all_invalid_file_seeds_samples() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("students_database.txt");
        std::fs::write(&path, "0 Nobody 1800 9 9.9\ngarbage\n").unwrap();

        let dir = Directory::open(path);
        assert_eq!(dir.len(), 5);
    }

    #[test]
    fn loaded_records_replace_samples() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("students_database.txt");
        std::fs::write(&path, "7 Orlova 2001 3 3.3\n").unwrap();

        let dir = Directory::open(path);
        assert_eq!(dir.students(), [Student::new(7, "Orlova", 2001, 3, 3.3)]);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("students_database.txt");
        std::fs::write(&path, "5 First 2000 1 3.0\n5 Second 2001 2 3.5\n").unwrap();

        let dir = Directory::open(path);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.find_by_id(5).unwrap().surname, "First");
        assert!(dir.find_by_id(6).is_none());
    }

    #[test]
    fn gpa_search_preserves_order() {
        let (_tmp, dir) = setup_temp_directory();
        let found = dir.search(&Query::ByGpaAtLeast(4.0));
        assert_eq!(ids(&found), [101, 103]);
    }

    #[test]
    fn gpa_threshold_between_samples() {
        let (_tmp, dir) = setup_temp_directory();
        let found = dir.search(&Query::ByGpaAtLeast(3.8));
        assert_eq!(ids(&found), [101, 102, 103, 104]);
    }

    #[test]
    fn search_with_no_match_is_empty() {
        let (_tmp, dir) = setup_temp_directory();
        assert!(dir.search(&Query::ById(-999)).is_empty());
    }

    #[test]
    fn search_by_each_field() {
        let (_tmp, dir) = setup_temp_directory();
        assert_eq!(ids(&dir.search(&Query::ById(104))), [104]);
        assert_eq!(ids(&dir.search(&Query::BySurname("Petrov".into()))), [102]);
        assert_eq!(ids(&dir.search(&Query::ByBirthYear(2004))), [102, 105]);
        assert_eq!(ids(&dir.search(&Query::ByStudyYear(1))), [101, 103]);
    }

    #[test]
    fn add_appends_and_resaves_everything() {
        let (_tmp, mut dir) = setup_temp_directory();
        dir.add(Student::new(106, "Novikov", 2002, 4, 3.5)).unwrap();

        assert_eq!(dir.len(), 6);
        let reloaded = Directory::open(dir.path().to_path_buf());
        assert_eq!(reloaded.students(), dir.students());
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let (_tmp, mut dir) = setup_temp_directory();
        let err = dir
            .add(Student::new(101, "Impostor", 2002, 4, 3.5))
            .unwrap_err();

        assert!(matches!(err, AddError::DuplicateId(101)));
        assert_eq!(dir.len(), 5);
        assert!(!dir.path().exists());
    }

    #[test]
    fn add_rejects_invalid_record() {
        let (_tmp, mut dir) = setup_temp_directory();
        let err = dir.add(Student::new(200, "Late", 2016, 1, 3.0)).unwrap_err();

        assert!(matches!(
            err,
            AddError::Invalid(ValidationError::BirthYear(2016))
        ));
        assert_eq!(dir.len(), 5);
    }

    #[test]
    fn failed_save_keeps_record_in_memory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("students.txt");
        let mut dir = Directory::open(path);

        let err = dir.add(Student::new(300, "Unsaved", 2000, 1, 2.0)).unwrap_err();

        assert!(matches!(err, AddError::Save(_)));
        assert_eq!(dir.len(), 6);
        assert!(dir.find_by_id(300).is_some());
    }
}
