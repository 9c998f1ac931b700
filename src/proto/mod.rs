// Generated proto modules will be included here after build
// Run `cargo build` to generate the proto code

pub mod common {
    include!("clinic.common.rs");
}

pub mod auth {
    include!("clinic.auth.rs");
}

pub mod inventory {
    include!("clinic.inventory.rs");
}

pub mod notifications {
    include!("clinic.notifications.rs");
}

pub mod users {
    include!("clinic.users.rs");
}

pub mod health {
    include!("clinic.health.rs");
}
