//! The student entity as stored and as returned over the wire.

use serde::Serialize;

/// Maximum number of characters allowed in a student's name (column bound).
pub const MAX_NAME_LENGTH: usize = 100;

/// A persisted student row.
///
/// Field names follow the `estudiantes` table and the public JSON contract
/// (`nombre`, `edad`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i32,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "edad")]
    #[sqlx(rename = "edad")]
    pub age: i32,
}

/// Validated fields for creating or replacing a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub age: i32,
}

impl StudentInput {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Builds the stored row for this input under `id`.
    pub fn into_student(self, id: i32) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serializes_with_wire_names() {
        let student = StudentInput::new("Ana", 20).into_student(3);
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "nombre": "Ana", "edad": 20}));
    }
}
