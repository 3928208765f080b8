//! Dynamic library loading.
//!
//! Used to load compiler plugins. Every failure is reported as `None`; the
//! reason is logged at debug level.

use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use tracing::debug;

/// An open shared object or DLL. Closed on drop.
#[derive(Debug)]
pub struct Library {
    handle: NonNull<c_void>,
    path: PathBuf,
}

impl Library {
    /// Open the library at `path`. Symbols are bound lazily where the OS
    /// supports it.
    ///
    /// # Safety
    ///
    /// Loading a library runs its initialization routines, which can do
    /// anything. The caller must trust the library at `path`.
    pub unsafe fn open(path: impl AsRef<Path>) -> Option<Library> {
        let path = path.as_ref();
        match sys::open(path) {
            Some(handle) => Some(Library {
                handle,
                path: path.to_path_buf(),
            }),
            None => {
                debug!(path = %path.display(), "failed to open library");
                None
            }
        }
    }

    /// Resolve `name` to its address in this library.
    ///
    /// Calling through or dereferencing the address is up to the caller,
    /// who must know the symbol's real type.
    pub fn symbol(&self, name: &str) -> Option<NonNull<c_void>> {
        let address = sys::symbol(self.handle, name);
        if address.is_none() {
            debug!(path = %self.path.display(), symbol = name, "symbol not found");
        }
        address
    }

    /// The path this library was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the library now instead of at end of scope.
    pub fn close(self) {}
}

impl Drop for Library {
    fn drop(&mut self) {
        sys::close(self.handle);
    }
}

/// Close a library handle that may never have been opened. `None` is a
/// no-op.
pub fn close(library: Option<Library>) {
    drop(library);
}

#[cfg(unix)]
mod sys {
    use std::ffi::{c_void, CString};
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;
    use std::ptr::NonNull;

    pub(super) unsafe fn open(path: &Path) -> Option<NonNull<c_void>> {
        let path = CString::new(path.as_os_str().as_bytes()).ok()?;
        NonNull::new(libc::dlopen(path.as_ptr(), libc::RTLD_LAZY))
    }

    pub(super) fn symbol(handle: NonNull<c_void>, name: &str) -> Option<NonNull<c_void>> {
        let name = CString::new(name).ok()?;
        // SAFETY: `handle` came from a successful dlopen and is not yet closed.
        NonNull::new(unsafe { libc::dlsym(handle.as_ptr(), name.as_ptr()) })
    }

    pub(super) fn close(handle: NonNull<c_void>) {
        // SAFETY: called exactly once, from Library::drop.
        unsafe {
            libc::dlclose(handle.as_ptr());
        }
    }
}

#[cfg(windows)]
mod sys {
    use std::ffi::{c_void, CString};
    use std::path::Path;
    use std::ptr::NonNull;

    use ::windows::core::PCSTR;
    use ::windows::Win32::Foundation::{FreeLibrary, HMODULE};
    use ::windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryA};

    pub(super) unsafe fn open(path: &Path) -> Option<NonNull<c_void>> {
        let path = CString::new(path.to_str()?).ok()?;
        let module = LoadLibraryA(PCSTR::from_raw(path.as_ptr().cast())).ok()?;
        NonNull::new(module.0)
    }

    pub(super) fn symbol(handle: NonNull<c_void>, name: &str) -> Option<NonNull<c_void>> {
        let name = CString::new(name).ok()?;
        // SAFETY: `handle` came from a successful LoadLibraryA and is not yet freed.
        let module = HMODULE(handle.as_ptr());
        let address = unsafe { GetProcAddress(module, PCSTR::from_raw(name.as_ptr().cast())) }?;
        NonNull::new(address as *mut c_void)
    }

    pub(super) fn close(handle: NonNull<c_void>) {
        // SAFETY: called exactly once, from Library::drop.
        unsafe {
            let _ = FreeLibrary(HMODULE(handle.as_ptr()));
        }
    }
}

#[cfg(not(any(unix, windows)))]
mod sys {
    use std::ffi::c_void;
    use std::path::Path;
    use std::ptr::NonNull;

    pub(super) unsafe fn open(_path: &Path) -> Option<NonNull<c_void>> {
        None
    }

    pub(super) fn symbol(_handle: NonNull<c_void>, _name: &str) -> Option<NonNull<c_void>> {
        None
    }

    pub(super) fn close(_handle: NonNull<c_void>) {}
}
