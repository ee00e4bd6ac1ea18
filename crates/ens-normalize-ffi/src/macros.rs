/// Declares an exported `extern "C"` function whose body runs under [`catch`](crate::catch).
///
/// A panic never unwinds into the caller; the function returns the type's
/// [`PanicDefault`](crate::PanicDefault) instead.
macro_rules! ffi_fn {
    ($(#[$attr:meta])* fn $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)? $body:block) => {
        $(#[$attr])*
        #[unsafe(no_mangle)]
        pub extern "C" fn $name($($arg: $ty),*) $(-> $ret)? {
            $crate::catch(move || $body)
        }
    };
    (
        $(#[$attr:meta])*
        unsafe fn $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)? $body:block
    ) => {
        $(#[$attr])*
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? {
            $crate::catch(move || $body)
        }
    };
}
