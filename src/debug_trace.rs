macro_rules! trace {
    ( @lex $($args:tt)+ ) => {
        #[cfg(feature = "debug_trace")]
        println!("@lex: {}", format_args!($($args)+));
    };

    ( @resolve $($args:tt)+ ) => {
        #[cfg(feature = "debug_trace")]
        println!("@resolve: {}", format_args!($($args)+));
    };
}
