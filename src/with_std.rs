
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        fmt,
        hash,
        iter,
        num,
        ops,
        str,
        string,
        f64,
    };

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
