use std::io::Write;

/// Header written before the book listing.
pub const BOOKS_HEADER: &str = "Books in Library:";
/// Header written before the member listing.
pub const MEMBERS_HEADER: &str = "Library Members:";
/// Header written before the staff listing.
pub const STAFF_HEADER: &str = "Library Staff:";

/// One-line human readable summary of a catalog entity.
pub trait Describe {
    /// Returns the summary line, without a trailing newline.
    fn describe(&self) -> String;
}

/// Writes `header` and then one described line per item, in order.
pub fn write_listing<'a, W, T, I>(out: &mut W, header: &str, items: I) -> std::io::Result<()>
where
    W: Write + ?Sized,
    T: Describe + 'a,
    I: IntoIterator<Item = &'a T>,
{
    writeln!(out, "{header}")?;
    for item in items {
        writeln!(out, "{}", item.describe())?;
    }
    Ok(())
}
