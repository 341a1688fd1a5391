use std::error::Error;

pub type AnyErr = Box<dyn Error>;
pub type MyResult<T> = Result<T, AnyErr>;
pub trait MyResultTrait<T> {
    fn my_result(self) -> MyResult<T>;
    fn result_str(self) -> Result<T, String>;
}
impl<T, Err: Into<AnyErr>> MyResultTrait<T> for Result<T, Err> {
    fn my_result(self) -> MyResult<T> {
        self.map_err(|e| e.into())
    }
    fn result_str(self) -> Result<T, String> {
        self.map_err(|e| e.into().to_string())
    }
}

pub fn res_ok<T>(t: T) -> MyResult<T> {
    Ok(t)
}
pub fn res_err<T, E: Into<AnyErr>>(e: E) -> MyResult<T> {
    Err(e.into())
}

#[cfg(test)]
mod test {
    use super::*;
    use simple_error::simple_error;

    #[test]
    fn result_str_keeps_message() {
        let r: Result<(), _> = Err(simple_error!("no such file: {}", "index.html"));
        assert_eq!(r.result_str().unwrap_err(), "no such file: index.html");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let r: MyResult<()> = res_err(io);
        assert_eq!(r.unwrap_err().to_string(), "gone");
        assert_eq!(res_ok(7).unwrap(), 7);
    }
}
