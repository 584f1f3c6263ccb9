//! Compiled-in portfolio text, one block per topic.
//!
//! Pre-formatted for a monospace scrollback; the store serves these verbatim.

pub(crate) const SUMMARY: &str = "\
PROFESSIONAL SUMMARY
====================

Full stack developer with four years of production experience building
web platforms end to end: typed front ends, Node and Rust services, and
the deployment pipelines underneath them. Currently at Meridian Labs,
where I lead the billing and onboarding surfaces of a B2B analytics
product used by ~200 customer teams.

Strengths: API design, performance work, and turning vague product
sketches into shippable, tested features.";

pub(crate) const BIO: &str = "\
ABOUT ME
========

I started programming on a hand-me-down laptop, building text games in
Python, and never really stopped. After a computer science degree I
joined a three-person startup, which taught me more about shipping under
constraints than any course could.

Outside work I maintain a couple of small open source tools, play bass
badly, and hike whenever the weather cooperates. I care about software
that respects its users: fast, predictable, and honest about errors.";

pub(crate) const SKILLS: &str = "\
TECHNICAL SKILLS
================

Languages
  TypeScript / JavaScript  - daily driver for product work
  Rust                     - services, CLI tooling
  Python                   - scripting, data wrangling
  SQL                      - Postgres, query tuning

Front end
  React, Next.js, Tailwind CSS, accessibility-first markup

Back end
  Node.js, Express, Actix, REST and GraphQL API design,
  Redis caching, message queues

Infrastructure
  Docker, GitHub Actions, AWS (ECS, S3, CloudFront), Terraform basics

Practices
  Test-driven development, code review culture, incremental migration";

pub(crate) const EXPERIENCE: &str = "\
WORK EXPERIENCE
===============

Meridian Labs - Senior Full Stack Developer        2023 - present
  Own the billing and onboarding surfaces of a B2B analytics product.
  Cut signup-to-first-dashboard time from 11 minutes to under 3.
  Led the migration of the invoicing service from Node to Rust,
  halving p99 latency.

Brightline (startup) - Software Engineer           2021 - 2023
  Second engineering hire. Built the customer dashboard, the public
  API, and most of the CI pipeline. Survived two pivots.

Freelance                                           2020 - 2021
  Delivered marketing sites and small internal tools for local
  businesses while finishing my degree.";

pub(crate) const PROJECTS: &str = "\
FEATURED PROJECTS
=================

ledgerline
  Open source double-entry bookkeeping engine in Rust with a plain-text
  file format. 1.2k stars, used by three hosted products.

shiftplan
  Scheduling web app for small restaurants; drag-and-drop rota editor,
  conflict detection, SMS reminders. React + Node + Postgres.

termfolio
  This terminal. A portfolio that behaves like a shell, because resumes
  are boring and scrollback is not.

tidytab
  Browser extension that groups and hibernates tabs by project.
  ~40k weekly users.";

pub(crate) const EDUCATION: &str = "\
EDUCATION
=========

B.Sc. Computer Science                              2017 - 2021
  University of Waterloo
  Focus: distributed systems, programming languages.
  Co-op terms at two fintech companies.

Selected coursework
  Operating systems, compilers, database internals, HCI.";

pub(crate) const CERTIFICATIONS: &str = "\
CERTIFICATIONS
==============

AWS Certified Solutions Architect - Associate       2024
CKA: Certified Kubernetes Administrator             2023
Postgres Professional Certification                 2022";

pub(crate) const CONTACT: &str = "\
CONTACT
=======

Email     alex@moreau.dev
GitHub    github.com/alexmoreau
LinkedIn  linkedin.com/in/alex-moreau-dev
Location  Toronto, Canada (UTC-5), open to remote

Currently open to senior full stack and Rust backend roles.
The fastest way to reach me is email; I reply within a day.";
