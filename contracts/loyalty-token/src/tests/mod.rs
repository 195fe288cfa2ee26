mod test_admin;
mod test_token;
