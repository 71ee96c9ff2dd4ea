pub mod application {
    pub mod product {
        pub mod list;
        pub mod register_or_update;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod list;
            pub mod register_or_update;
            pub mod remove;
        }
    }
}
