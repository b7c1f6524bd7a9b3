use serde::{Deserialize, Serialize};

/// One scored review category within a performance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCategory {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
}

/// Performance review data owned by exactly one employee.
///
/// `employee_id` always matches the owning employee's id; the store stamps
/// it on create and update so callers cannot produce a dangling record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub employee_id: String,
    pub period: String,
    pub overall_score: u32,
    pub categories: Vec<PerformanceCategory>,
}

/// An employee record. The id is assigned by the store at creation and is
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub join_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceRecord>,
}

impl Employee {
    /// Returns a copy with the update's supplied fields merged over this
    /// record. The id is preserved; an embedded performance record is
    /// re-stamped with the owner's id.
    pub fn merged(&self, update: &EmployeeUpdate) -> Employee {
        let mut merged = self.clone();
        if let Some(name) = &update.name {
            merged.name = name.clone();
        }
        if let Some(department) = &update.department {
            merged.department = department.clone();
        }
        if let Some(position) = &update.position {
            merged.position = position.clone();
        }
        if let Some(email) = &update.email {
            merged.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            merged.phone = phone.clone();
        }
        if let Some(join_date) = &update.join_date {
            merged.join_date = join_date.clone();
        }
        if let Some(performance) = &update.performance {
            let mut performance = performance.clone();
            performance.employee_id = merged.id.clone();
            merged.performance = Some(performance);
        }
        merged
    }
}

/// Creation input: every employee field except the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub join_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceRecord>,
}

impl EmployeeDraft {
    /// Materializes the draft under a freshly assigned id, stamping an
    /// embedded performance record with that id.
    pub(crate) fn into_employee(self, id: String) -> Employee {
        let performance = self.performance.map(|mut record| {
            record.employee_id = id.clone();
            record
        });
        Employee {
            id,
            name: self.name,
            department: self.department,
            position: self.position,
            email: self.email,
            phone: self.phone,
            join_date: self.join_date,
            performance,
        }
    }
}

/// Partial update input. `None` fields are left untouched by the merge;
/// the id is not part of the update and can never be altered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceRecord>,
}

fn category(name: &str, score: u32) -> PerformanceCategory {
    PerformanceCategory {
        name: name.to_string(),
        score,
        max_score: 100,
    }
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    department: &str,
    position: &str,
    email: &str,
    phone: &str,
    join_date: &str,
    period: &str,
    overall_score: u32,
    categories: Vec<PerformanceCategory>,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        join_date: join_date.to_string(),
        performance: Some(PerformanceRecord {
            employee_id: id.to_string(),
            period: period.to_string(),
            overall_score,
            categories,
        }),
    }
}

/// The fixed sample dataset the store is seeded with at construction.
pub(crate) fn seed() -> Vec<Employee> {
    vec![
        employee(
            "EMP-1",
            "John Doe",
            "Engineering",
            "Senior Developer",
            "john.doe@toppersedge.com",
            "+1-234-567-8900",
            "2022-01-15",
            "Q4 2024",
            92,
            vec![
                category("Technical Skills", 95),
                category("Communication", 90),
                category("Problem Solving", 92),
                category("Team Collaboration", 88),
            ],
        ),
        employee(
            "EMP-2",
            "Jane Smith",
            "Product",
            "Product Manager",
            "jane.smith@toppersedge.com",
            "+1-234-567-8901",
            "2021-06-20",
            "Q4 2024",
            87,
            vec![
                category("Strategic Planning", 90),
                category("Stakeholder Management", 85),
                category("Analytics", 88),
                category("Leadership", 82),
            ],
        ),
        employee(
            "EMP-3",
            "Mike Johnson",
            "Design",
            "UX Designer",
            "mike.johnson@toppersedge.com",
            "+1-234-567-8902",
            "2023-03-10",
            "Q4 2024",
            89,
            vec![
                category("User Research", 92),
                category("UI Design", 90),
                category("Prototyping", 88),
                category("Design Systems", 85),
            ],
        ),
        employee(
            "EMP-4",
            "Sarah Wilson",
            "Engineering",
            "Frontend Developer",
            "sarah.wilson@toppersedge.com",
            "+1-234-567-8903",
            "2022-09-05",
            "Q4 2024",
            85,
            vec![
                category("Technical Skills", 88),
                category("Code Quality", 87),
                category("Documentation", 80),
                category("Innovation", 85),
            ],
        ),
        employee(
            "EMP-5",
            "David Brown",
            "Marketing",
            "Marketing Manager",
            "david.brown@toppersedge.com",
            "+1-234-567-8904",
            "2023-01-15",
            "Q4 2024",
            90,
            vec![
                category("Campaign Management", 92),
                category("Analytics", 88),
                category("Content Creation", 91),
                category("Brand Strategy", 89),
            ],
        ),
    ]
}
