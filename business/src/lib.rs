pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_or_create;
        pub mod remove_item;
        pub mod update_item;
    }
    pub mod order {
        pub mod get_all;
        pub mod get_by_id;
        pub mod place;
        pub mod update_status;
    }
    pub mod product {
        pub mod get_by_id;
        pub mod search;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_or_create;
            pub mod remove_item;
            pub mod update_item;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod place;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod search;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
