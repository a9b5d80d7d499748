//! Documentation topics, in display order: getting started, core
//! concepts, database integration, authentication and security, advanced
//! features.

use super::{doc, example, snippet, text};
use crate::types::ContentEntry;

pub fn docs() -> Vec<ContentEntry> {
    vec![
        // Getting started
        doc(
            "what-is-express",
            "What is Express.js?",
            vec![
                text(
                    "Intro to Express",
                    "Express.js is a fast, unopinionated, and minimalist web framework for Node.js. It simplifies building server-side logic with features like routing, middleware, and templates. It’s widely used to build APIs and web applications.",
                ),
                text(
                    "Why Choose Express?",
                    "Because of its simplicity and flexibility, Express is one of the most popular frameworks for Node.js developers.",
                ),
            ],
        ),
        doc(
            "why-use-express",
            "Why Use Express.js?",
            vec![
                text(
                    "Key Advantages",
                    "Express helps developers:\n- Quickly create web applications\n- Handle routing with ease\n- Integrate middleware functions\n- Build RESTful APIs",
                ),
                text(
                    "Real-World Use",
                    "Companies like Uber, Accenture, and IBM use Express for building web services and APIs.",
                ),
            ],
        ),
        doc(
            "installing-express",
            "Installing Express.js",
            vec![
                text(
                    "Requirements",
                    "Make sure Node.js and npm are installed on your machine.",
                ),
                example(
                    "Installation Command",
                    "You can install Express via npm:",
                    "npm install express",
                ),
                example(
                    "Initialize a Project",
                    "Before installing Express, create a new project folder and run:",
                    "npm init -y",
                ),
            ],
        ),
        doc(
            "setup-first-app",
            "Setting Up Your First Express App",
            vec![
                example(
                    "Create an entry file",
                    "Create a file called `index.js` and paste the following code:",
                    r#"const express = require('express');
const app = express();

app.get('/', (req, res) => {
  res.send('Hello, Express!');
});

app.listen(3000, () => {
  console.log('Server is running on http://localhost:3000');
});"#,
                ),
                example("Run Your App", "Start your server using Node:", "node index.js"),
            ],
        ),
        // Core concepts
        doc(
            "understanding-routing",
            "Understanding Routing",
            vec![
                text(
                    "What is Routing?",
                    "Routing refers to how an application’s endpoints (URIs) respond to client requests.",
                ),
                snippet(
                    "Example:",
                    r#"app.get('/', (req, res) => {
  res.send('Home Page');
});"#,
                ),
            ],
        ),
        doc(
            "handling-http-methods",
            "Handling HTTP Methods (GET, POST, etc.)",
            vec![snippet(
                "Example:",
                r#"app.post('/submit', (req, res) => {
  res.send('Form submitted');
});"#,
            )],
        ),
        doc(
            "using-middleware",
            "Using Middleware",
            vec![
                text(
                    "What is Middleware?",
                    "Middleware functions have access to the request and response objects. They can execute any code, modify the request/response, and end the request-response cycle.",
                ),
                snippet(
                    "Example:",
                    r#"app.use((req, res, next) => {
  console.log('Time:', Date.now());
  next();
});"#,
                ),
            ],
        ),
        doc(
            "error-handling",
            "Error Handling in Express",
            vec![snippet(
                "Custom Error Handler",
                r#"app.use((err, req, res, next) => {
  console.error(err.stack);
  res.status(500).send('Something broke!');
});"#,
            )],
        ),
        doc(
            "req-res-objects",
            "Working with Request and Response Objects",
            vec![
                snippet(
                    "Request Object",
                    r#"app.get('/', (req, res) => {
  console.log(req.query);
});"#,
                ),
                snippet("Response Object", "res.send('Hello');"),
            ],
        ),
        // Database integration
        doc(
            "connect-mongodb",
            "Connecting to MongoDB",
            vec![snippet(
                "Mongoose Connection",
                r#"const mongoose = require('mongoose');
mongoose.connect('mongodb://localhost/mydb');"#,
            )],
        ),
        doc(
            "mongoose-setup",
            "Using Mongoose with Express",
            vec![snippet(
                "Define a Schema",
                r#"const UserSchema = new mongoose.Schema({ name: String });
const User = mongoose.model('User', UserSchema);"#,
            )],
        ),
        doc(
            "crud-operations",
            "CRUD Operations with Express and MongoDB",
            vec![snippet(
                "Create User Example",
                r#"app.post('/users', async (req, res) => {
  const user = new User(req.body);
  await user.save();
  res.send(user);
});"#,
            )],
        ),
        // Authentication and security
        doc(
            "auth-setup",
            "Setting Up User Authentication (Login/Register)",
            vec![snippet(
                "Register Example",
                r#"app.post('/register', async (req, res) => {
  // Validate and save user
});"#,
            )],
        ),
        doc(
            "password-reset",
            "Implementing Password Reset",
            vec![text(
                "Reset Flow",
                "Generate a reset token, send via email, allow user to reset password.",
            )],
        ),
        doc(
            "secure-routes",
            "Securing Routes with Middleware",
            vec![snippet(
                "Middleware Auth Check",
                r#"function auth(req, res, next) {
  if (!req.user) return res.status(401).send('Access denied');
  next();
}"#,
            )],
        ),
        doc(
            "jwt-auth",
            "Using JSON Web Tokens (JWT)",
            vec![snippet(
                "JWT Flow",
                "const token = jwt.sign({ id: user._id }, 'secret');",
            )],
        ),
        // Advanced features
        doc(
            "stripe-integration",
            "Integrating Stripe for Payments",
            vec![snippet(
                "Stripe Example",
                r#"const stripe = require('stripe')('secret');
app.post('/pay', async (req, res) => {
  const payment = await stripe.charges.create({...});
});"#,
            )],
        ),
        doc(
            "input-validation",
            "Input Validation in Express",
            vec![snippet(
                "Using express-validator",
                r#"app.post('/user', [
  body('email').isEmail()
], (req, res) => {...});"#,
            )],
        ),
        doc(
            "file-uploads",
            "File Uploads with Express",
            vec![snippet(
                "Using multer",
                r#"const multer = require('multer');
const upload = multer({ dest: 'uploads/' });
app.post('/upload', upload.single('file'), (req, res) => {
  res.send('Uploaded');
});"#,
            )],
        ),
        doc(
            "restful-apis",
            "Building RESTful APIs with Express",
            vec![snippet(
                "Example",
                r#"app.get('/users/:id', (req, res) => {
  res.send('User details');
});"#,
            )],
        ),
    ]
}
