use std::error::Error;
use std::num::ParseIntError;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::Duration;

use vessel_core::sequence::{partition_maybes, sequence_maybes};
use vessel_core::validate::{ensure, validate_all, validate_first};
use vessel_core::{ContractError, ContractErrorKind, Fault, Maybe, MaybeIterExt, Outcome, Present, Unit};

fn raised_message(f: impl FnOnce()) -> String {
  let payload = catch_unwind(AssertUnwindSafe(f)).unwrap_err();
  *payload.downcast::<String>().unwrap()
}

#[test]
fn doubling_a_some() {
  assert_eq!(Maybe::some(5).map(|x| x * 2).unwrap(), 10);
}

#[test]
fn default_for_none() {
  assert_eq!(Maybe::<i32>::none().unwrap_or(99), 99);
}

#[test]
fn chaining_a_check() {
  let result = Outcome::<i32, String>::ok(5)
    .and_then(|x| if x > 0 { Outcome::ok(x) } else { Outcome::err("neg".to_owned()) })
    .unwrap();
  assert_eq!(result, 5);
}

#[test]
fn mapping_an_error() {
  let error = Outcome::<i32, String>::err("boom".to_owned()).map_err(|e| e + "!").unwrap_err();
  assert_eq!(error, "boom!");
}

#[test]
fn sequencing_options() {
  assert_eq!(vec![Maybe::some(1), Maybe::some(2), Maybe::some(3)].into_iter().sequence(), Maybe::some(vec![1, 2, 3]));
  assert_eq!(sequence_maybes(vec![Maybe::some(1), Maybe::none(), Maybe::some(3)]), Maybe::none());
}

#[test]
fn transposing_an_outcome_of_maybe() {
  assert_eq!(Outcome::<Maybe<i32>, String>::ok(Maybe::some(5)).transpose(), Maybe::some(Outcome::ok(5)));
  assert_eq!(Outcome::<Maybe<i32>, String>::ok(Maybe::none()).transpose(), Maybe::none());
  assert_eq!(
    Outcome::<Maybe<i32>, String>::err("e".to_owned()).transpose(),
    Maybe::some(Outcome::err("e".to_owned()))
  );
}

#[test]
fn misuse_is_distinguishable_from_failure() {
  // A business failure is a value.
  let failed = Outcome::<i32, Fault>::err(Fault::new("insufficient funds"));
  assert!(failed.is_err());
  // Asking it for a value is misuse.
  let error: ContractError = failed.clone().try_unwrap().unwrap_err();
  assert_eq!(error.kind(), ContractErrorKind::ResultUnwrap);
  assert_eq!(error.source().unwrap().to_string(), "insufficient funds");
  assert_eq!(
    raised_message(|| { failed.clone().unwrap(); }),
    "called `unwrap` on an `Err` value: insufficient funds"
  );

  assert_eq!(Maybe::<i32>::none().try_unwrap().unwrap_err().kind(), ContractErrorKind::EmptyOptionAccess);
  assert_eq!(Outcome::<i32, i32>::ok(1).try_unwrap_err().unwrap_err().kind(), ContractErrorKind::ResultUnwrapErr);
  assert_eq!(Outcome::<i32, i32>::err(1).try_expect("reading").unwrap_err().kind(), ContractErrorKind::ResultExpect);
  assert_eq!(Outcome::<i32, i32>::ok(1).try_expect_err("reading").unwrap_err().kind(), ContractErrorKind::ResultExpectErr);

  // Each misuse names the operation in the panic message.
  assert_eq!(raised_message(|| { Maybe::<i32>::none().unwrap(); }), "called `unwrap` on a `None` value");
  assert_eq!(raised_message(|| { Outcome::<i32, i32>::ok(1).unwrap_err(); }), "called `unwrap_err` on an `Ok` value: 1");
  assert_eq!(raised_message(|| { Outcome::<i32, i32>::err(1).expect("reading"); }), "reading: 1");
  assert_eq!(raised_message(|| { Outcome::<i32, i32>::ok(1).expect_err("reading"); }), "reading: 1");
}

#[test]
fn side_effecting_steps_return_unit() {
  let mut written = Vec::new();
  let mut write = |line: &str| -> Outcome<Unit, Fault> {
    if line.is_empty() { return Outcome::err(Fault::new("empty line")) }
    written.push(line.to_owned());
    Outcome::ok(Unit)
  };
  assert_eq!(write("a").and(write("b")), Outcome::ok(Unit));
  assert_eq!(write("").and(Outcome::ok(Unit)), Outcome::err(Fault::new("empty line")));
  assert_eq!(written, vec!["a", "b"]);
}

#[test]
fn lookup_pipeline() {
  let users = [(1, "ada"), (2, "grace")];
  let find = |id: i32| Maybe::from_std(users.iter().find(|(uid, _)| *uid == id).map(|(_, name)| *name));
  let greeting = |id: i32| find(id)
    .filter(|name| name.len() > 3)
    .map(|name| format!("hello, {name}"))
    .ok_or_else(|| format!("no user {id}"));
  assert_eq!(greeting(2), Outcome::ok("hello, grace".to_owned()));
  assert_eq!(greeting(1), Outcome::err("no user 1".to_owned()));
  assert_eq!(greeting(3).into_err(), Maybe::some("no user 3".to_owned()));
}

#[test]
fn fail_fast_and_accumulate_differ() {
  let checks: [fn(&i32) -> Outcome<Unit, &'static str>; 3] = [
    |n: &i32| ensure(*n > 0, || "not positive"),
    |n: &i32| ensure(*n % 2 == 0, || "odd"),
    |n: &i32| ensure(*n < 100, || "too large"),
  ];
  assert_eq!(validate_first(-3, checks), Outcome::err("not positive"));
  assert_eq!(validate_all(-3, checks), Outcome::err(vec!["not positive", "odd"]));
  assert_eq!(validate_all(42, checks), Outcome::ok(42));
}

#[test]
fn partition_reports_a_count() {
  let (values, missing) = partition_maybes([Maybe::some('a'), Maybe::none(), Maybe::none(), Maybe::some('b')]);
  assert_eq!(values, vec!['a', 'b']);
  assert_eq!(missing, 2);
}

#[test]
fn catching_a_legacy_panic() {
  fn legacy_parse(input: &str) -> u16 {
    input.parse().unwrap_or_else(|_| panic!("invalid port `{input}`"))
  }
  let port = Outcome::try_run_fault(|| legacy_parse("8080"));
  assert_eq!(port, Outcome::ok(8080));
  let port = Outcome::try_run_fault(|| legacy_parse("http"));
  assert_eq!(port.unwrap_err().message(), "invalid port `http`");
}

#[test]
fn parsing_with_std() {
  let port = Outcome::from_std("8080".parse::<u16>());
  assert_eq!(port, Outcome::ok(8080));

  let port = Outcome::from_std("http".parse::<u16>());
  let error = port.clone().try_unwrap().unwrap_err();
  let cause = error.source().and_then(|fault| fault.source()).unwrap();
  assert!(cause.downcast_ref::<ParseIntError>().is_some());
  assert_eq!(port.map_err(|e| e.to_string()).unwrap_err(), "invalid digit found in string");

  let timeout = Maybe::some(Duration::from_secs(30)).filter(|d| d.as_secs() > 0);
  assert_eq!(timeout.unwrap_or_default(), Duration::from_secs(30));
  let home = Maybe::some(PathBuf::from("/home/ada")).map(|path| path.join(".config"));
  assert_eq!(home.unwrap(), PathBuf::from("/home/ada/.config"));
}

#[test]
fn foreign_types_are_wrapped_as_present() {
  #[derive(Debug, PartialEq)]
  struct Invoice { total: u32 }

  let invoice = Maybe::some(Present(Invoice { total: 40 })).map(Present::into_inner);
  assert_eq!(invoice, Maybe::from_std(Some(Present(Invoice { total: 40 }))).map(Present::into_inner));
  assert_eq!(invoice.map(|i| i.total).unwrap(), 40);
}
