// C entry points for presentation layers that are not written in Rust.
// Every returned string is owned by Rust and must go back through
// `mentor_free_string`. Panics are caught at the boundary.
use crate::core::engine::builtin;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Null or non-UTF-8 input reads as "".
unsafe fn read_str<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    // Interior NULs cannot cross the boundary; drop them.
    let bytes: Vec<u8> = s.into_bytes().into_iter().filter(|&b| b != 0).collect();
    CString::new(bytes).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

fn guarded(name: &str, f: impl FnOnce() -> String) -> *mut c_char {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(s) => into_c_string(s),
        Err(_) => {
            tracing::error!(entry_point = name, "panic caught at C boundary");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `text` and `lang` must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn mentor_select_response(
    text: *const c_char,
    lang: *const c_char,
) -> *mut c_char {
    let text = read_str(text);
    let lang = read_str(lang);
    guarded("mentor_select_response", || {
        builtin().select_response(text, lang).to_string()
    })
}

/// # Safety
/// `lang` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn mentor_greeting(lang: *const c_char) -> *mut c_char {
    let lang = read_str(lang);
    guarded("mentor_greeting", || builtin().greeting(lang).to_string())
}

/// Returns the quick questions as a JSON array of strings.
///
/// # Safety
/// `lang` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn mentor_quick_questions(lang: *const c_char) -> *mut c_char {
    let lang = read_str(lang);
    guarded("mentor_quick_questions", || {
        serde_json::to_string(&builtin().quick_questions(lang)).unwrap_or_else(|_| "[]".to_string())
    })
}

/// # Safety
/// `s` must be null or a pointer returned by one of the functions above,
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn mentor_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
