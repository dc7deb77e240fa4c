use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "sigla", default)]
    pub code: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    #[serde(rename = "sid", alias = "id")]
    pub semester_id: i32,
    #[serde(rename = "disciplinas", default)]
    pub disciplines: Vec<Discipline>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `/semestre/{sid}` endpoint answers with a bare array of disciplines,
/// but an object shaped like [`Semester`] is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum SemesterBody {
    Disciplines(Vec<Discipline>),
    Record(Semester),
}

impl Semester {
    pub fn from_json(semester_id: i32, body: &str) -> serde_json::Result<Self> {
        Ok(match serde_json::from_str(body)? {
            SemesterBody::Disciplines(disciplines) => Semester {
                semester_id,
                disciplines,
                extra: Map::new(),
            },
            SemesterBody::Record(semester) => semester,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Course,
    Semester,
    Discipline,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Course => "course",
            Resource::Semester => "semester",
            Resource::Discipline => "discipline",
        })
    }
}
