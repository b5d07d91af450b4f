pub mod application {
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        mod lookup;
        pub mod purchase;
        pub mod update;
    }
    pub mod wishlist {
        pub mod create;
        pub mod delete;
        pub mod delete_all;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod purchase;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod payload;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod delete_all;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
