//! Sample data shown by the dashboard. Nothing in here is ever modified.

use std::fmt;

use crate::search::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Amber,
    Violet,
}

#[derive(Debug, Clone, Copy)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
    pub accent: Accent,
    pub icon: &'static str,
}

pub static STATS: &[StatCard] = &[
    StatCard {
        title: "Total Users",
        value: "12,456",
        change: "+12%",
        positive: true,
        accent: Accent::Blue,
        icon: "U",
    },
    StatCard {
        title: "Revenue",
        value: "₹45,678",
        change: "+8%",
        positive: true,
        accent: Accent::Green,
        icon: "R",
    },
    StatCard {
        title: "Orders",
        value: "1,234",
        change: "-2%",
        positive: false,
        accent: Accent::Amber,
        icon: "O",
    },
    StatCard {
        title: "Growth",
        value: "23%",
        change: "+5%",
        positive: true,
        accent: Accent::Violet,
        icon: "G",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Pending,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::User => "User",
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub status: Status,
    pub role: Role,
}

impl Searchable for User {
    fn name(&self) -> &str {
        self.name
    }

    fn email(&self) -> &str {
        self.email
    }
}

pub static USERS: &[User] = &[
    User {
        id: 1,
        name: "Arjun Sharma",
        email: "arjun.sharma@example.com",
        status: Status::Active,
        role: Role::Admin,
    },
    User {
        id: 2,
        name: "Priya Patel",
        email: "priya.patel@example.com",
        status: Status::Pending,
        role: Role::User,
    },
    User {
        id: 3,
        name: "Rajesh Kumar",
        email: "rajesh.kumar@example.com",
        status: Status::Inactive,
        role: Role::User,
    },
    User {
        id: 4,
        name: "Sneha Gupta",
        email: "sneha.gupta@example.com",
        status: Status::Active,
        role: Role::Manager,
    },
    User {
        id: 5,
        name: "Vikram Singh",
        email: "vikram.singh@example.com",
        status: Status::Active,
        role: Role::User,
    },
    User {
        id: 6,
        name: "Kavya Reddy",
        email: "kavya.reddy@example.com",
        status: Status::Pending,
        role: Role::Manager,
    },
    User {
        id: 7,
        name: "Aditya Joshi",
        email: "aditya.joshi@example.com",
        status: Status::Active,
        role: Role::User,
    },
    User {
        id: 8,
        name: "Ritu Agarwal",
        email: "ritu.agarwal@example.com",
        status: Status::Inactive,
        role: Role::User,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: u32,
    pub revenue: u32,
}

pub static REVENUE_TREND: &[ChartPoint] = &[
    ChartPoint { name: "Jan", value: 400, revenue: 2400 },
    ChartPoint { name: "Feb", value: 300, revenue: 1398 },
    ChartPoint { name: "Mar", value: 500, revenue: 3800 },
    ChartPoint { name: "Apr", value: 400, revenue: 3908 },
    ChartPoint { name: "May", value: 600, revenue: 4800 },
    ChartPoint { name: "Jun", value: 550, revenue: 3800 },
];

#[derive(Debug, Clone, Copy)]
pub struct DeviceShare {
    pub name: &'static str,
    pub value: u32,
    pub accent: Accent,
}

pub static DEVICE_USAGE: &[DeviceShare] = &[
    DeviceShare { name: "Desktop", value: 400, accent: Accent::Blue },
    DeviceShare { name: "Mobile", value: 300, accent: Accent::Green },
    DeviceShare { name: "Tablet", value: 200, accent: Accent::Amber },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Todo,
    Progress,
    Review,
    Done,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Todo => "To Do",
            Stage::Progress => "In Progress",
            Stage::Review => "Review",
            Stage::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Task {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub assignee: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct KanbanColumn {
    pub stage: Stage,
    pub tasks: &'static [Task],
}

pub static KANBAN: &[KanbanColumn] = &[
    KanbanColumn {
        stage: Stage::Todo,
        tasks: &[
            Task {
                id: 1,
                title: "Design Homepage",
                description: "Create wireframes and mockups",
                assignee: "Arjun",
                date: "2024-01-15",
            },
            Task {
                id: 2,
                title: "Setup Database",
                description: "Configure PostgreSQL database",
                assignee: "Priya",
                date: "2024-01-16",
            },
            Task {
                id: 3,
                title: "User Authentication",
                description: "Implement login and signup",
                assignee: "Vikram",
                date: "2024-01-17",
            },
        ],
    },
    KanbanColumn {
        stage: Stage::Progress,
        tasks: &[
            Task {
                id: 4,
                title: "API Development",
                description: "Build REST API endpoints",
                assignee: "Rajesh",
                date: "2024-01-14",
            },
            Task {
                id: 5,
                title: "Frontend Components",
                description: "Create reusable UI components",
                assignee: "Sneha",
                date: "2024-01-13",
            },
        ],
    },
    KanbanColumn {
        stage: Stage::Review,
        tasks: &[
            Task {
                id: 6,
                title: "Code Review",
                description: "Review authentication module",
                assignee: "Kavya",
                date: "2024-01-13",
            },
            Task {
                id: 7,
                title: "Testing Module",
                description: "Unit testing for user service",
                assignee: "Aditya",
                date: "2024-01-12",
            },
        ],
    },
    KanbanColumn {
        stage: Stage::Done,
        tasks: &[
            Task {
                id: 8,
                title: "Project Setup",
                description: "Initialize React project",
                assignee: "Arjun",
                date: "2024-01-12",
            },
            Task {
                id: 9,
                title: "Environment Config",
                description: "Setup development environment",
                assignee: "Ritu",
                date: "2024-01-11",
            },
        ],
    },
];
