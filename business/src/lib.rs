pub mod application {
    pub mod vision {
        pub mod analyze;
        pub mod poll;
        pub mod scheduler;
    }
}

pub mod domain {
    pub mod logger;
    pub mod vision {
        pub mod errors;
        pub mod grid;
        pub mod model;
        pub mod plates;
        pub mod polling;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod analyze;
        }
    }
}
