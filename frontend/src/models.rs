// Mock 数据：`--features mock` 构建时替代后端
#[cfg(feature = "mock")]
use appointment_desk_shared::{Appointment, User};

/// 返回 23 个用户，足够翻三页。
#[cfg(feature = "mock")]
pub fn get_mock_users() -> Vec<User> {
    let names = ["alice", "bob", "carol", "dave", "erin", "frank"];

    (1..=23)
        .map(|i| {
            let name = names[(i as usize) % names.len()];
            User {
                id: i,
                username: format!("{}{:02}", name, i),
                email: Some(format!("{}{:02}@example.com", name, i)),
                phone_number: Some(mock_phone(i)),
                is_admin: i == 1,
            }
        })
        .collect()
}

/// 返回 40 条预约，分布在当年与下一年的各个月份。
#[cfg(feature = "mock")]
pub fn get_mock_appointments() -> Vec<Appointment> {
    let services = ["Haircut", "Beard trim", "Coloring", "Consultation"];
    let year = crate::session::current_year();

    (1..=40)
        .map(|i| {
            let month = (i % 12) + 1;
            let day = (i * 7) % 28 + 1;
            let appointment_year = if i > 30 { year + 1 } else { year };
            Appointment {
                id: i,
                name: Some(format!("Customer {}", i)),
                // Every fifth booking reuses one regular's number.
                phone_number: if i % 5 == 0 { "555-0100".to_string() } else { mock_phone(i) },
                date: format!("{:04}-{:02}-{:02}", appointment_year, month, day),
                time: Some(format!("{:02}:{:02}", 9 + i % 8, if i % 2 == 0 { 0 } else { 30 })),
                service: Some(services[(i as usize) % services.len()].to_string()),
                notes: (i % 6 == 0).then(|| "Prefers the window seat".to_string()),
            }
        })
        .collect()
}

#[cfg(feature = "mock")]
fn mock_phone(i: i64) -> String {
    format!("555-{:04}", 100 + i * 3)
}
