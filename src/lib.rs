pub mod modules {
    pub mod posts {
        pub mod core {
            pub mod errors;
            pub mod ordering;
            pub mod ports;
            pub mod post;
            pub mod search;
        }
        pub mod use_cases {
            pub mod list_posts {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_post {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_post {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_post {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search_posts {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
                pub mod query_params;
            }
            pub mod outbound {
                pub mod post_store_in_memory;
            }
        }
    }
}

pub mod shell;
