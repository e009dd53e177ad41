// Crate entry point. Re-export modules so tests and the binary can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod config;

pub mod modules {
    pub mod expenses {
        pub mod core {
            pub mod expense;
        }
        pub mod store;
        pub mod adapters {
            pub mod in_memory;
        }
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod diagnostics {
        pub mod counter;
        pub mod health;
        pub mod load;
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
