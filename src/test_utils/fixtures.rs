//! Test fixtures for sample service payloads
//!
//! Builders for manifest markup and pull request JSON in the shapes the service
//! returns them.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// Test fixture for sample pom.xml files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// Manifest with a property reference, a literal version and a parent
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
<project>
  <properties>
    <my.version>1.0.0</my.version>
  </properties>
  <parent>
    <artifactId>parent-artifact</artifactId>
    <version>2.0.0</version>
  </parent>
  <dependencies>
    <dependency>
      <artifactId>dep1</artifactId>
      <version>${my.version}</version>
    </dependency>
    <dependency>
      <artifactId>dep2</artifactId>
      <version>3.0.0</version>
    </dependency>
  </dependencies>
</project>
"#
            .trim()
            .to_string(),
        }
    }

    /// Namespaced Maven manifest exercising both sentinels
    pub fn maven() -> Self {
        Self {
            name: "maven".to_string(),
            content: r#"
<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>payments</artifactId>
  <properties>
    <java.version>17</java.version>
    <jackson.version>2.17.1</jackson.version>
    <alias.version>${jackson.version}</alias.version>
  </properties>
  <dependencies>
    <dependency>
      <groupId>com.fasterxml.jackson.core</groupId>
      <artifactId>jackson-databind</artifactId>
      <version>${jackson.version}</version>
    </dependency>
    <dependency>
      <groupId>org.springframework.boot</groupId>
      <artifactId>spring-boot-starter-web</artifactId>
    </dependency>
    <dependency>
      <groupId>org.projectlombok</groupId>
      <artifactId>lombok</artifactId>
      <version>${lombok.version}</version>
    </dependency>
    <dependency>
      <groupId>com.example</groupId>
      <artifactId>alias-user</artifactId>
      <version>${alias.version}</version>
    </dependency>
  </dependencies>
</project>
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest with an empty dependencies section
    pub fn empty_dependencies() -> Self {
        Self {
            name: "empty_dependencies".to_string(),
            content: "<project><dependencies></dependencies></project>".to_string(),
        }
    }

    /// Manifest with no dependencies section
    pub fn missing_dependencies() -> Self {
        Self {
            name: "missing_dependencies".to_string(),
            content: "<project><properties><a>1</a></properties></project>".to_string(),
        }
    }

    /// Markup that is not well-formed
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: "<project><dependencies><dependency></dependencies></project>".to_string(),
        }
    }

    /// Write the manifest to a directory as `pom.xml`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join("pom.xml");
        fs::write(&manifest_path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", self.name))?;
        Ok(manifest_path)
    }
}

/// Test fixture for pull request payloads
#[derive(Clone, Debug)]
pub struct ReviewFixture {
    pub records: Vec<Value>,
}

impl ReviewFixture {
    /// One completed and one active pull request, with a service account reviewer
    pub fn basic() -> Self {
        Self {
            records: vec![
                json!({
                    "pullRequestId": 123,
                    "status": "completed",
                    "title": "PR 1",
                    "description": "Description 1",
                    "repository": { "name": "repo1" },
                    "createdBy": { "displayName": "User 1" },
                    "creationDate": "2025-01-01T00:00:00Z",
                    "closedDate": "2025-01-03T00:00:00Z",
                    "reviewers": [
                        { "displayName": "Person 1" },
                        { "displayName": "DOMAIN\\svc" }
                    ]
                }),
                json!({
                    "pullRequestId": 456,
                    "status": "active",
                    "title": "PR 2",
                    "description": "Description 2",
                    "repository": { "name": "repo2" },
                    "createdBy": { "displayName": "User 2" },
                    "creationDate": "2025-01-02T00:00:00Z",
                    "reviewers": []
                }),
            ],
        }
    }

    /// Like [`ReviewFixture::basic`] but the second record has no author
    pub fn missing_author() -> Self {
        let mut fixture = Self::basic();
        if let Some(record) = fixture.records.get_mut(1).and_then(Value::as_object_mut) {
            record.remove("createdBy");
        }
        fixture
    }

    /// Records as a bare JSON array
    pub fn to_array_json(&self) -> String {
        Value::Array(self.records.clone()).to_string()
    }

    /// Records wrapped in the service's `{ count, value }` envelope
    pub fn to_envelope_json(&self) -> String {
        json!({ "count": self.records.len(), "value": self.records }).to_string()
    }

    /// Write the records to `dir/name` as a bare JSON array
    pub fn write_to(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        fs::write(&path, self.to_array_json())
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }
}
