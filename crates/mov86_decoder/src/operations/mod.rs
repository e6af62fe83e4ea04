pub(crate) mod mov;
